//! Language preference storage in `~/.config/ltm/config.toml`.
//!
//! Reads never fail: a missing file, unreadable file or unparseable content
//! falls back to the default language, with a logged warning for the latter
//! two. Writes are best-effort and log instead of erroring.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default interface language; the product shipped Chinese-first.
pub const DEFAULT_LANGUAGE: &str = "zh";

/// On-disk configuration. A single key today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LtmConfig {
    /// Interface language code (one of the ten supported, see `i18n`).
    pub language: String,
}

impl Default for LtmConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ltm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// The persisted language code, or `"zh"` on absence or any storage error.
pub fn preferred_language() -> String {
    match config_path() {
        Ok(path) => read_language_from(&path),
        Err(err) => {
            tracing::warn!(error = %err, "cannot locate config dir, using default language");
            DEFAULT_LANGUAGE.to_string()
        }
    }
}

/// Persists a new language code; errors are logged, not returned.
pub fn set_preferred_language(code: &str) {
    match config_path() {
        Ok(path) => write_language_to(&path, code),
        Err(err) => {
            tracing::warn!(error = %err, "cannot locate config dir, language not saved");
        }
    }
}

/// Path-taking read behind [`preferred_language`].
pub fn read_language_from(path: &Path) -> String {
    if !path.exists() {
        return DEFAULT_LANGUAGE.to_string();
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot read config, using default language");
            return DEFAULT_LANGUAGE.to_string();
        }
    };
    match toml::from_str::<LtmConfig>(&data) {
        Ok(cfg) => cfg.language,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "unparseable config, using default language");
            DEFAULT_LANGUAGE.to_string()
        }
    }
}

/// Path-taking write behind [`set_preferred_language`].
pub fn write_language_to(path: &Path, code: &str) {
    let cfg = LtmConfig {
        language: code.to_string(),
    };
    let toml = match toml::to_string_pretty(&cfg) {
        Ok(toml) => toml,
        Err(err) => {
            tracing::warn!(error = %err, "cannot serialize config, language not saved");
            return;
        }
    };
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            tracing::warn!(path = %path.display(), error = %err, "cannot create config dir, language not saved");
            return;
        }
    }
    if let Err(err) = fs::write(path, toml) {
        tracing::warn!(path = %path.display(), error = %err, "cannot write config, language not saved");
    }
}
