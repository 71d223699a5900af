//! `ltm search <url>`: look up a URL and print the outcome.
//!
//! The talkative variant: localized status lines on stdout for every step,
//! ending in the capture date or a failure message. The panel reuses the
//! same rendering for each submitted line.

use anyhow::Result;
use ltm_core::availability::{AvailabilityClient, LookupError};
use ltm_core::config;
use ltm_core::i18n::{self, Lang, Messages};
use ltm_core::resolve::{self, Resolution};
use ltm_core::timefmt;
use ltm_core::url_input;

use crate::cli::launcher;

pub fn run_search(url: &str, no_open: bool) -> Result<()> {
    let client = AvailabilityClient::default();
    search_and_render(&client, url, !no_open);
    Ok(())
}

/// One full lookup round: validate, resolve, print the localized outcome.
/// When a capture is found, `open` launches the browser; otherwise the
/// archived URL is printed instead.
pub(super) fn search_and_render(client: &AvailabilityClient, input: &str, open: bool) {
    let msgs = i18n::messages(Lang::resolve(&config::preferred_language()));
    let input = input.trim();
    if input.is_empty() {
        println!("{}", msgs.please_enter_url);
        return;
    }
    if !url_input::is_valid_url(input) {
        println!("{}", msgs.please_enter_valid_url);
        return;
    }
    let normalized = url_input::normalize_url(input);

    println!("{}", msgs.searching);
    let outcome = resolve::resolve_snapshot(client, &normalized);
    if let Err(err) = &outcome {
        tracing::warn!(url = %normalized, error = %err, "lookup failed");
    }
    println!("{}", outcome_line(&outcome, msgs));

    if let Ok(Resolution::Exact(snapshot)) | Ok(Resolution::Domain(snapshot)) = &outcome {
        if open {
            if let Err(err) = launcher::open_in_browser(&snapshot.archived_url) {
                tracing::warn!(error = %err, "could not launch the browser");
                println!("{}", snapshot.archived_url);
            }
        } else {
            println!("{}", snapshot.archived_url);
        }
    }
}

/// Localized outcome line for a finished lookup. A domain-level match gets
/// wording distinct from an exact-page hit.
pub(super) fn outcome_line(
    outcome: &Result<Resolution, LookupError>,
    msgs: &Messages,
) -> String {
    match outcome {
        Ok(Resolution::Exact(snapshot)) => {
            let date = timefmt::format_wayback_timestamp(&snapshot.timestamp, msgs.date_format);
            i18n::fill(msgs.found_snapshot, &[("date", &date)])
        }
        Ok(Resolution::Domain(snapshot)) => {
            let date = timefmt::format_wayback_timestamp(&snapshot.timestamp, msgs.date_format);
            i18n::fill(msgs.found_domain_snapshot, &[("date", &date)])
        }
        Ok(Resolution::NoArchive) => msgs.no_archive_found.to_string(),
        Ok(Resolution::NoPageArchive) => msgs.no_page_archive_found.to_string(),
        Err(err) => i18n::fill(msgs.error_fetching, &[("error", &error_detail(err, msgs))]),
    }
}

/// Error text for interpolation; a blank Display falls back to the
/// localized unknown-error wording.
pub(super) fn error_detail(err: &LookupError, msgs: &Messages) -> String {
    let detail = err.to_string();
    if detail.is_empty() {
        msgs.unknown_error.to_string()
    } else {
        detail
    }
}
