use super::Value;

use chrono::NaiveDateTime;

/// Canonical text encoding for date-time values.
///
/// This is SQLite's `datetime` text shape; encoded values sort
/// lexicographically in chronological order. The serializer, the sqlite
/// driver, and row hydration all share it.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Encodes a date-time using the canonical text format.
pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Decodes a date-time from the canonical text format.
///
/// The fractional-second part is optional on input.
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT).ok()
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<&NaiveDateTime> for Value {
    fn from(value: &NaiveDateTime) -> Self {
        Self::DateTime(*value)
    }
}
