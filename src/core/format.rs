//! Date/time parsing and display formatting.
//!
//! Events and fixtures are stored as unix timestamps; these helpers parse
//! the CLI's date inputs and render the display formats used across the
//! list and detail views.

use crate::error::{NhuError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Input formats accepted for date/time arguments.
const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a CLI date/time argument such as "2025-06-24 15:00".
pub fn parse_date_time(value: &str) -> Result<DateTime<Utc>> {
    for fmt in INPUT_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(NhuError::InvalidDateTime {
        value: value.to_string(),
    })
}

/// Convert a stored unix timestamp back to a `DateTime`.
pub fn from_timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

/// Compact card format: "Jun 24, 2025 3:00 PM".
pub fn format_date_time(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Detail-view format: "Tuesday, June 24, 2025".
pub fn format_full_date(dt: DateTime<Utc>) -> String {
    dt.format("%A, %B %-d, %Y").to_string()
}

/// Time-only format: "3:00 PM".
pub fn format_time(dt: DateTime<Utc>) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// Home-feed date badge: day-of-month plus uppercased short month.
pub fn format_date_badge(dt: DateTime<Utc>) -> (String, String) {
    (
        dt.format("%d").to_string(),
        dt.format("%b").to_string().to_uppercase(),
    )
}
