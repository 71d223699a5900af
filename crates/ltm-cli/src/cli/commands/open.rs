//! `ltm open <url>`: jump straight to the archived copy.
//!
//! The quiet variant: nothing on stdout when the jump succeeds, a desktop
//! notification (with stderr fallback) when it cannot happen.

use anyhow::Result;
use ltm_core::availability::AvailabilityClient;
use ltm_core::config;
use ltm_core::i18n::{self, Lang};
use ltm_core::resolve::{self, Resolution};
use ltm_core::url_input;

use super::search::error_detail;
use crate::cli::launcher;
use crate::cli::PRODUCT_NAME;

pub fn run_open(url: &str) -> Result<()> {
    let msgs = i18n::messages(Lang::resolve(&config::preferred_language()));
    let input = url.trim();
    if input.is_empty() {
        eprintln!("{}", msgs.please_enter_url);
        return Ok(());
    }
    if !url_input::is_valid_url(input) {
        eprintln!("{}", msgs.please_enter_valid_url);
        return Ok(());
    }
    let normalized = url_input::normalize_url(input);

    let client = AvailabilityClient::default();
    match resolve::resolve_snapshot(&client, &normalized) {
        Ok(Resolution::Exact(snapshot)) => {
            tracing::info!(url = %normalized, archived = %snapshot.archived_url, "opening exact snapshot");
            launch(&snapshot.archived_url);
        }
        Ok(Resolution::Domain(snapshot)) => {
            tracing::info!(url = %normalized, archived = %snapshot.archived_url, "opening domain snapshot");
            launch(&snapshot.archived_url);
        }
        Ok(Resolution::NoArchive) => {
            let domain = url_input::host_for_display(&normalized);
            surface(&i18n::fill(
                msgs.no_archive_found_domain,
                &[("domain", &domain)],
            ));
        }
        Ok(Resolution::NoPageArchive) => surface(msgs.no_page_archive_found),
        Err(err) => {
            tracing::warn!(url = %normalized, error = %err, "lookup failed");
            surface(&i18n::fill(
                msgs.error_fetching,
                &[("error", &error_detail(&err, msgs))],
            ));
        }
    }

    Ok(())
}

/// Browser launch; on failure the archived URL is printed to stdout instead.
fn launch(archived_url: &str) {
    if let Err(err) = launcher::open_in_browser(archived_url) {
        tracing::warn!(error = %err, "could not launch the browser");
        println!("{archived_url}");
    }
}

/// Desktop notification, falling back to stderr when no helper answers.
fn surface(message: &str) {
    if let Err(err) = launcher::notify(PRODUCT_NAME, message) {
        tracing::debug!(error = %err, "no notification helper, printing instead");
        eprintln!("{message}");
    }
}
