use chrono::DateTime;
use std::time::{SystemTime, UNIX_EPOCH};

/// Get current Unix timestamp
pub fn unix_timestamp_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Convert a minute-denominated limit to whole hours.
///
/// Integer division: configurations below 60 minutes truncate to zero
/// hours, collapsing the lifetime of anything issued with them. This
/// mirrors the documented token-expiry contract and is deliberately not
/// rounded up.
pub fn minutes_to_hours(minutes: u64) -> u64 {
    minutes / 60
}

/// Function to format timestamp as readable date
pub fn format_timestamp(timestamp: u64) -> String {
    DateTime::from_timestamp(timestamp as i64, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
