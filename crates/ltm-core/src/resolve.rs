//! Two-tier snapshot resolution: the exact page first, then the bare domain.
//!
//! The lookup dependency is a trait so the strategy can run against canned
//! answers; `AvailabilityClient` is the production implementation.

use url::Url;

use crate::availability::{AvailabilityClient, LookupError, LookupResult, Snapshot};

/// Source of availability answers.
pub trait SnapshotLookup {
    fn lookup(&self, url: &str) -> Result<LookupResult, LookupError>;
}

impl SnapshotLookup for AvailabilityClient {
    fn lookup(&self, url: &str) -> Result<LookupResult, LookupError> {
        AvailabilityClient::lookup(self, url)
    }
}

/// Labeled outcome of the two-tier resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The exact page has a capture.
    Exact(Snapshot),
    /// Only the bare domain has a capture; callers must present it as a
    /// domain-level match, not an exact-page one.
    Domain(Snapshot),
    /// Neither the page nor the domain has a capture.
    NoArchive,
    /// The fallback tier could not answer: the domain was underivable or its
    /// lookup failed.
    NoPageArchive,
}

/// Resolves `normalized_url` to its closest capture.
///
/// A primary-tier error propagates; every fallback-tier failure is mapped to
/// [`Resolution::NoPageArchive`] and never escapes. The fallback target is
/// scheme+host of the input with path, query and fragment dropped.
pub fn resolve_snapshot<L: SnapshotLookup>(
    lookup: &L,
    normalized_url: &str,
) -> Result<Resolution, LookupError> {
    match lookup.lookup(normalized_url)? {
        LookupResult::Found(snapshot) => return Ok(Resolution::Exact(snapshot)),
        LookupResult::NotFound => {}
    }

    let domain = match domain_of(normalized_url) {
        Some(domain) => domain,
        None => {
            tracing::warn!(url = normalized_url, "no host to fall back to");
            return Ok(Resolution::NoPageArchive);
        }
    };

    tracing::debug!(%domain, "page has no capture, trying the domain");
    match lookup.lookup(&domain) {
        Ok(LookupResult::Found(snapshot)) => Ok(Resolution::Domain(snapshot)),
        Ok(LookupResult::NotFound) => Ok(Resolution::NoArchive),
        Err(err) => {
            tracing::warn!(%domain, error = %err, "domain fallback lookup failed");
            Ok(Resolution::NoPageArchive)
        }
    }
}

/// Scheme+host of `normalized_url`, or None when there is no host.
fn domain_of(normalized_url: &str) -> Option<String> {
    let parsed = Url::parse(normalized_url).ok()?;
    let host = parsed.host_str()?;
    Some(format!("{}://{}", parsed.scheme(), host))
}
