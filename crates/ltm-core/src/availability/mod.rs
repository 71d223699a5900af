//! Wayback Machine availability lookups.
//!
//! Uses the curl crate (libcurl) to issue one GET against the availability
//! endpoint per call. A single attempt with libcurl default timeouts; a miss
//! is a value, not an error, and what a miss means is the caller's business
//! (see `resolve` for the domain fallback).

mod wire;

use thiserror::Error;

/// Production availability endpoint.
pub const WAYBACK_AVAILABLE_ENDPOINT: &str = "https://archive.org/wayback/available";

/// A single archived capture of a URL at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Where the archived copy lives (a `web.archive.org/web/...` URL).
    pub archived_url: String,
    /// Capture time as 14 digits, `YYYYMMDDHHMMSS` in UTC.
    pub timestamp: String,
    /// HTTP status the archive recorded for the capture.
    pub status: String,
    /// The URL this lookup asked about; never the archived URL.
    pub original_url: String,
}

/// Outcome of a single availability call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(Snapshot),
    NotFound,
}

/// Failure of a single availability call.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Endpoint answered with a non-2xx status.
    #[error("availability endpoint returned HTTP {status}")]
    Http { status: u32 },
    /// Transport-level failure (DNS, connect, TLS, ...).
    #[error("availability request failed: {0}")]
    Transport(#[from] curl::Error),
    /// 2xx body that does not match the documented schema.
    #[error("malformed availability response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Client for the availability endpoint. Holds only the endpoint URL, so
/// tests can point it at a local server.
#[derive(Debug, Clone)]
pub struct AvailabilityClient {
    endpoint: String,
}

impl Default for AvailabilityClient {
    fn default() -> Self {
        Self::new(WAYBACK_AVAILABLE_ENDPOINT)
    }
}

impl AvailabilityClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Asks the endpoint for the closest capture of `url`.
    ///
    /// Follows redirects. Runs in the current thread and blocks until the
    /// transfer finishes.
    pub fn lookup(&self, url: &str) -> Result<LookupResult, LookupError> {
        let request_url = self.request_url(url);
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request_url)?;
        easy.follow_location(true)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code < 200 || code >= 300 {
            return Err(LookupError::Http { status: code });
        }

        decode_response(&body, url)
    }

    /// Endpoint URL with `url` percent-encoded into the `url` query parameter.
    fn request_url(&self, url: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("url", url)
            .finish();
        format!("{}?{}", self.endpoint, query)
    }
}

/// Decodes a 2xx availability body. Split from the transport so the schema
/// handling is testable without a server.
fn decode_response(body: &[u8], original_url: &str) -> Result<LookupResult, LookupError> {
    let parsed: wire::AvailabilityResponse =
        serde_json::from_slice(body).map_err(LookupError::MalformedResponse)?;

    let closest = match parsed.archived_snapshots.closest {
        Some(closest) => closest,
        None => return Ok(LookupResult::NotFound),
    };
    // The service occasionally reports a closest object with an empty URL;
    // that is a miss, not a malformed body.
    if closest.url.is_empty() {
        return Ok(LookupResult::NotFound);
    }

    Ok(LookupResult::Found(Snapshot {
        archived_url: closest.url,
        timestamp: closest.timestamp,
        status: closest.status,
        original_url: original_url.to_string(),
    }))
}
