//! `ltm lang`: show or set the interface language.

use anyhow::Result;
use ltm_core::config;
use ltm_core::i18n::{self, Lang};

pub fn run_lang(code: Option<&str>) -> Result<()> {
    match code {
        Some(code) => {
            config::set_preferred_language(code);
            // Unsupported codes are stored as-is but render as the default.
            let lang = Lang::resolve(code);
            let msgs = i18n::messages(lang);
            println!(
                "{}",
                i18n::fill(msgs.language_set, &[("name", lang.native_name())])
            );
        }
        None => {
            let active = Lang::resolve(&config::preferred_language());
            println!("  {:<6} {:<12} {}", "CODE", "NAME", "NATIVE");
            for info in i18n::supported_languages() {
                let marker = if info.code == active.code() { "*" } else { " " };
                println!("{} {:<6} {:<12} {}", marker, info.code, info.name, info.native_name);
            }
        }
    }
    Ok(())
}
