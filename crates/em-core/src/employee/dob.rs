//! Date-of-birth normalization.
//!
//! Backends tend to return `dob` as a full timestamp; the date input expects
//! a bare calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Calendar-date format expected by the date input field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// True when `value` is exactly a `YYYY-MM-DD` calendar date, with no
/// surrounding whitespace or time part.
pub fn is_calendar_date(value: &str) -> bool {
    // chrono alone accepts single-digit months and days and skips blanks
    // before numbers
    let shape_ok = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    shape_ok && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// Parses `raw` as a calendar date. Used to normalize stored values, not to
/// check user input.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`
/// datetimes. Timestamps keep the calendar date written in their own offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Normalizes `raw` to `YYYY-MM-DD`, leaving unparseable input untouched so
/// the validator can report it.
pub fn normalize_dob(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
