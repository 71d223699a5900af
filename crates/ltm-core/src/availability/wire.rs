//! Wire format of the Wayback availability endpoint.
//!
//! The schema is strict: a 2xx body must decode into these structures. An
//! absent `closest` means "no capture"; anything structurally different is a
//! malformed response, not a silent miss.

use serde::Deserialize;

/// Top-level availability response.
#[derive(Debug, Deserialize)]
pub(super) struct AvailabilityResponse {
    pub archived_snapshots: ArchivedSnapshots,
}

/// Container for the closest capture, if any.
#[derive(Debug, Deserialize)]
pub(super) struct ArchivedSnapshots {
    pub closest: Option<ClosestSnapshot>,
}

/// The closest capture as the service reports it. All three fields are
/// required; the endpoint also sends `available`, which adds nothing over
/// the presence of `closest` and is ignored.
#[derive(Debug, Deserialize)]
pub(super) struct ClosestSnapshot {
    pub url: String,
    pub timestamp: String,
    pub status: String,
}
