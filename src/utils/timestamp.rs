//! Rendering of creation timestamps.
//!
//! The service stores `created_at` as a naive UTC datetime and serializes it
//! without an offset. RFC 3339 values with an explicit offset are accepted as
//! well. Parsed values are shown in the viewer's local time.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

/// Display format: `1/15/2024, 2:30:00 PM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Formats a raw `created_at` value in the local time zone.
pub fn format_created_at(raw: &str) -> String {
    format_created_at_in(raw, &Local)
}

/// Formats a raw `created_at` value in the given time zone.
///
/// Values that cannot be parsed are returned unchanged.
pub fn format_created_at_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_created_at(raw) {
        Some(utc) => utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}
