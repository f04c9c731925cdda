//! Parsing and display of the service's string timestamps.
//!
//! The service writes timestamps without a zone marker; those are UTC.
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

pub const INVALID_DATE: &str = "Invalid date";

const DISPLAY_FORMAT: &str = "%B %-d, %Y at %I:%M %p";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn has_zone_marker(raw: &str) -> bool {
    raw.contains('Z') || raw.contains('+') || raw.get(10..).is_some_and(|tail| tail.contains('-'))
}

fn parse_zoned(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parses a service timestamp, treating zone-less values as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if has_zone_marker(raw) {
        parse_zoned(raw).map(|date| date.with_timezone(&Utc))
    } else {
        parse_naive(raw).map(|naive| naive.and_utc())
    }
}

/// Milliseconds since the epoch, used as the sort key for date columns.
pub fn timestamp_millis(raw: &str) -> Option<i64> {
    parse_timestamp(raw).map(|date| date.timestamp_millis())
}

/// Renders a timestamp in the given zone, e.g. "May 1, 2024 at 10:00 AM".
pub fn format_timestamp_in<Tz>(raw: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(raw) {
        Some(date) => date.with_timezone(zone).format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Renders a timestamp in the user's local time zone.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}
