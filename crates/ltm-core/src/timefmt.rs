//! Human-readable rendering of Wayback capture timestamps.

use chrono::NaiveDateTime;

/// Formats a 14-digit Wayback timestamp (`YYYYMMDDHHMMSS`, UTC) with the
/// given chrono pattern. Inputs that are not exactly 14 characters, or that
/// do not parse as a date, are returned unchanged.
pub fn format_wayback_timestamp(timestamp: &str, pattern: &str) -> String {
    if timestamp.len() != 14 {
        return timestamp.to_string();
    }
    match NaiveDateTime::parse_from_str(timestamp, "%Y%m%d%H%M%S") {
        Ok(dt) => dt.format(pattern).to_string(),
        Err(_) => timestamp.to_string(),
    }
}
