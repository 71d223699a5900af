//! `ltm panel`: interactive lookup panel.
//!
//! Reads one query per line. `:page` searches the captured current page,
//! `:lang` shows or switches the interface language, `:quit` (or EOF) ends
//! the session. Anything else is looked up like a `search`.

use anyhow::{Context, Result};
use ltm_core::availability::AvailabilityClient;
use ltm_core::config;
use ltm_core::i18n::{self, Lang};
use ltm_core::url_input;
use std::io::{self, Write};

use super::lang::run_lang;
use super::search::search_and_render;
use crate::cli::PRODUCT_NAME;

/// Environment variable consulted for the current page when `--page-url` is
/// not given.
pub const PAGE_URL_ENV: &str = "LTM_PAGE_URL";

#[derive(Debug, PartialEq, Eq)]
enum PanelInput {
    Search(String),
    Page,
    Lang(Option<String>),
    Quit,
    Empty,
}

pub fn run_panel(page_url: Option<String>) -> Result<()> {
    let page = capture_page_url(page_url.or_else(|| std::env::var(PAGE_URL_ENV).ok()));
    let client = AvailabilityClient::default();

    println!("{PRODUCT_NAME}");
    let msgs = i18n::messages(Lang::resolve(&config::preferred_language()));
    if let Some(page) = &page {
        let domain = url_input::host_for_display(page);
        println!("{}", i18n::fill(msgs.panel_current_page, &[("domain", &domain)]));
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        // Re-resolve messages each round; `:lang` may have changed them.
        let msgs = i18n::messages(Lang::resolve(&config::preferred_language()));
        print!("{}", msgs.panel_url_prompt);
        io::stdout().flush().context("flushing the panel prompt")?;

        line.clear();
        if stdin.read_line(&mut line).context("reading panel input")? == 0 {
            break;
        }
        match parse_panel_input(&line) {
            PanelInput::Search(url) => search_and_render(&client, &url, true),
            PanelInput::Page => match &page {
                Some(page) => search_and_render(&client, page, true),
                None => println!("{}", msgs.cannot_get_current_url),
            },
            PanelInput::Lang(code) => run_lang(code.as_deref())?,
            PanelInput::Quit => break,
            PanelInput::Empty => println!("{}", msgs.please_enter_url),
        }
    }

    Ok(())
}

/// Keeps a candidate current-page URL unless it is an internal browser page.
fn capture_page_url(candidate: Option<String>) -> Option<String> {
    let url = candidate?;
    if url_input::is_internal_browser_url(&url) {
        tracing::debug!(%url, "internal browser page, not offering it");
        return None;
    }
    Some(url)
}

fn parse_panel_input(line: &str) -> PanelInput {
    let line = line.trim();
    if line.is_empty() {
        return PanelInput::Empty;
    }
    if line == ":quit" || line == ":q" {
        return PanelInput::Quit;
    }
    if line == ":page" {
        return PanelInput::Page;
    }
    if let Some(rest) = line.strip_prefix(":lang") {
        if rest.is_empty() {
            return PanelInput::Lang(None);
        }
        if rest.starts_with(char::is_whitespace) {
            return PanelInput::Lang(Some(rest.trim().to_string()));
        }
    }
    PanelInput::Search(line.to_string())
}
