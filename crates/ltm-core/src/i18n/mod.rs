//! Message catalog for user-facing text.
//!
//! One immutable [`Messages`] table per supported locale, resolved by value
//! and never mutated at runtime. Templates carry `{domain}`, `{date}` and
//! `{error}` placeholders, filled with [`fill`].

mod catalog;

pub use catalog::messages;

/// Supported interface languages. The set is fixed; any other code resolves
/// to Chinese, the catalog default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Zh,
    En,
    Es,
    Fr,
    De,
    Ja,
    Ko,
    It,
    Pt,
    Ru,
}

impl Lang {
    /// All supported languages, in picker order.
    pub const ALL: [Lang; 10] = [
        Lang::Zh,
        Lang::En,
        Lang::Es,
        Lang::Fr,
        Lang::De,
        Lang::Ja,
        Lang::Ko,
        Lang::It,
        Lang::Pt,
        Lang::Ru,
    ];

    /// Two-letter code as stored in the config file.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::Ja => "ja",
            Lang::Ko => "ko",
            Lang::It => "it",
            Lang::Pt => "pt",
            Lang::Ru => "ru",
        }
    }

    /// English display name.
    pub fn english_name(self) -> &'static str {
        match self {
            Lang::Zh => "Chinese",
            Lang::En => "English",
            Lang::Es => "Spanish",
            Lang::Fr => "French",
            Lang::De => "German",
            Lang::Ja => "Japanese",
            Lang::Ko => "Korean",
            Lang::It => "Italian",
            Lang::Pt => "Portuguese",
            Lang::Ru => "Russian",
        }
    }

    /// Display name in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::Zh => "中文",
            Lang::En => "English",
            Lang::Es => "Español",
            Lang::Fr => "Français",
            Lang::De => "Deutsch",
            Lang::Ja => "日本語",
            Lang::Ko => "한국어",
            Lang::It => "Italiano",
            Lang::Pt => "Português",
            Lang::Ru => "Русский",
        }
    }

    /// Exact-match code lookup. No region handling: `"en-US"` is not `"en"`.
    pub fn from_code(code: &str) -> Option<Lang> {
        Lang::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Code lookup with the catalog default for anything unsupported.
    pub fn resolve(code: &str) -> Lang {
        Lang::from_code(code).unwrap_or(Lang::Zh)
    }
}

/// One supported language as shown in the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

/// The ten selectable languages, in picker order.
pub fn supported_languages() -> [LanguageInfo; 10] {
    Lang::ALL.map(|lang| LanguageInfo {
        code: lang.code(),
        name: lang.english_name(),
        native_name: lang.native_name(),
    })
}

/// Per-locale user-facing templates. `date_format` is the chrono pattern used
/// to render capture timestamps (see `timefmt`); every pattern stops at
/// minute granularity.
#[derive(Debug)]
pub struct Messages {
    pub searching: &'static str,
    pub found_snapshot: &'static str,
    pub found_domain_snapshot: &'static str,
    pub no_archive_found: &'static str,
    pub no_archive_found_domain: &'static str,
    pub no_page_archive_found: &'static str,
    pub error_fetching: &'static str,
    pub unknown_error: &'static str,
    pub please_enter_url: &'static str,
    pub please_enter_valid_url: &'static str,
    pub cannot_get_current_url: &'static str,
    pub language_set: &'static str,
    pub panel_url_prompt: &'static str,
    pub panel_current_page: &'static str,
    pub date_format: &'static str,
}

/// Replaces `{key}` placeholders in `template`. Keys absent from `pairs` are
/// left in place.
pub fn fill(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in pairs {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_codes() {
        assert_eq!(Lang::resolve("en"), Lang::En);
        assert_eq!(Lang::resolve("ru"), Lang::Ru);
        assert_eq!(Lang::resolve("zh"), Lang::Zh);
    }

    #[test]
    fn resolve_falls_back_to_chinese() {
        assert_eq!(Lang::resolve("tlh"), Lang::Zh);
        assert_eq!(Lang::resolve(""), Lang::Zh);
        // Region variants are not collapsed.
        assert_eq!(Lang::resolve("en-US"), Lang::Zh);
    }

    #[test]
    fn ten_languages_with_unique_codes() {
        let langs = supported_languages();
        assert_eq!(langs.len(), 10);
        for (i, a) in langs.iter().enumerate() {
            for b in &langs[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
        assert_eq!(langs[0].code, "zh");
        assert_eq!(langs[0].native_name, "中文");
    }

    #[test]
    fn fill_replaces_placeholders() {
        assert_eq!(
            fill("No archive found - {domain}", &[("domain", "example.com")]),
            "No archive found - example.com"
        );
        assert_eq!(
            fill("{a} and {b}", &[("a", "x"), ("b", "y")]),
            "x and y"
        );
    }

    #[test]
    fn fill_leaves_unknown_placeholders() {
        assert_eq!(fill("keep {this}", &[("other", "x")]), "keep {this}");
    }

    #[test]
    fn every_locale_has_placeholders_where_expected() {
        for lang in Lang::ALL {
            let msgs = messages(lang);
            assert!(
                msgs.found_snapshot.contains("{date}"),
                "{} found_snapshot",
                lang.code()
            );
            assert!(
                msgs.found_domain_snapshot.contains("{date}"),
                "{} found_domain_snapshot",
                lang.code()
            );
            assert!(
                msgs.no_archive_found_domain.contains("{domain}"),
                "{} no_archive_found_domain",
                lang.code()
            );
            assert!(
                msgs.error_fetching.contains("{error}"),
                "{} error_fetching",
                lang.code()
            );
            assert!(
                msgs.language_set.contains("{name}"),
                "{} language_set",
                lang.code()
            );
            assert!(
                msgs.panel_current_page.contains("{domain}"),
                "{} panel_current_page",
                lang.code()
            );
            assert!(!msgs.searching.is_empty(), "{} searching", lang.code());
            assert!(!msgs.date_format.is_empty(), "{} date_format", lang.code());
        }
    }

    #[test]
    fn chinese_messages_match_product_wording() {
        let msgs = messages(Lang::Zh);
        assert_eq!(
            fill(msgs.no_archive_found_domain, &[("domain", "example.com")]),
            "未找到存档 - example.com"
        );
        assert_eq!(msgs.please_enter_valid_url, "请输入有效的网址");
    }
}
