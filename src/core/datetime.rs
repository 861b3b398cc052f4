//! Timestamp parsing and calendar-day arithmetic.
//!
//! Check-off logs arrive with timestamps in a couple of shapes: full
//! ISO-8601 with an offset, or a date+time string without a timezone.
//! Streak logic only cares about the calendar-day difference between
//! consecutive entries, never the elapsed hours.

use chrono::{DateTime, NaiveDateTime};

use crate::error::HabitError;

/// Formats accepted for timezone-less timestamps, tried in order.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored timestamp string.
///
/// Accepts RFC 3339 (normalized to the UTC instant) and the timezone-less
/// formats above. Sub-second precision is preserved when present.
///
/// # Errors
///
/// Returns [`HabitError::Timestamp`] carrying the offending text if no
/// format matches. Malformed input is never silently coerced.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, HabitError> {
    let trimmed = value.trim();

    let mut last_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt.naive_utc()),
        Err(e) => e,
    };

    for format in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, format) {
            Ok(dt) => return Ok(dt),
            Err(e) => last_err = e,
        }
    }

    Err(HabitError::timestamp(value, &last_err))
}

/// Whole calendar days between two timestamps, later minus earlier.
///
/// Computed by date subtraction, not duration rounding: 23:59 on one day
/// to 00:00 the next is a delta of 1.
#[must_use]
pub fn day_delta(later: NaiveDateTime, earlier: NaiveDateTime) -> i64 {
    (later.date() - earlier.date()).num_days()
}
