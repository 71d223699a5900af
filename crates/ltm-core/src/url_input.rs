//! Free-form URL input handling.
//!
//! Accepts whatever the user typed (or clicked) and decides whether it is, or
//! can become, a well-formed absolute URL. Normalization only prepends a
//! scheme; it never rewrites an input that already parses.

use url::Url;

/// Scheme prefixes of internal browser pages, which are dropped at capture
/// time rather than sent to lookup.
const INTERNAL_PREFIXES: [&str; 4] = [
    "chrome://",
    "chrome-extension://",
    "moz-extension://",
    "edge://",
];

/// True if `input` parses as an absolute URL, either as-is or once `https://`
/// is prepended (so bare domains like `example.com` count as valid).
pub fn is_valid_url(input: &str) -> bool {
    if Url::parse(input).is_ok() {
        return true;
    }
    Url::parse(&format!("https://{input}")).is_ok()
}

/// Returns `input` unchanged when it already parses as an absolute URL,
/// otherwise `https://` + input. No other canonicalization: trailing slashes,
/// query strings and fragments stay exactly as typed.
pub fn normalize_url(input: &str) -> String {
    if Url::parse(input).is_ok() {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Host of `url` for message interpolation; the input itself when it does not
/// parse or has no host.
pub fn host_for_display(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

/// True for internal browser pages (`chrome://`, extension pages, `edge://`).
pub fn is_internal_browser_url(url: &str) -> bool {
    INTERNAL_PREFIXES.iter().any(|p| url.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_is_valid() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1#frag"));
    }

    #[test]
    fn bare_domain_is_valid_via_https_prefix() {
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("example.com/path/page.html"));
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(!is_valid_url("not a url ???"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn normalize_keeps_parseable_input_unchanged() {
        assert_eq!(
            normalize_url("https://example.com/a?b=c#d"),
            "https://example.com/a?b=c#d"
        );
        assert_eq!(normalize_url("http://example.com/"), "http://example.com/");
    }

    #[test]
    fn normalize_prepends_https_for_bare_domain() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(
            normalize_url("example.com/path"),
            "https://example.com/path"
        );
    }

    #[test]
    fn host_for_display_extracts_host() {
        assert_eq!(host_for_display("https://example.com/deep/path"), "example.com");
        assert_eq!(host_for_display("https://example.com:8080/x"), "example.com");
    }

    #[test]
    fn host_for_display_falls_back_to_input() {
        assert_eq!(host_for_display("not a url ???"), "not a url ???");
    }

    #[test]
    fn internal_browser_urls_are_detected() {
        assert!(is_internal_browser_url("chrome://settings"));
        assert!(is_internal_browser_url("chrome-extension://abcdef/popup.html"));
        assert!(is_internal_browser_url("moz-extension://abcdef/index.html"));
        assert!(is_internal_browser_url("edge://flags"));
        assert!(!is_internal_browser_url("https://example.com"));
        assert!(!is_internal_browser_url("http://chrome.example.com"));
    }
}
