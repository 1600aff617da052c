//! Conversion between the exporter's numeric date offsets and absolute instants.
//!
//! The exporter stores `date` as seconds since 2001-01-01T00:00:00Z.

use chrono::{DateTime, Utc};

/// 2001-01-01T00:00:00Z in Unix epoch milliseconds.
pub const REFERENCE_UNIX_MILLIS: i64 = 978_307_200_000;

pub fn reference_instant() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(REFERENCE_UNIX_MILLIS).unwrap_or_default()
}

/// Convert an offset in seconds (possibly fractional or negative) to an instant.
///
/// Precision is one millisecond; sub-millisecond fractions are rounded to the nearest one.
/// Returns `None` for NaN, infinities, and offsets past chrono's calendar range.
pub fn offset_to_date(offset_secs: f64) -> Option<DateTime<Utc>> {
    let millis = (REFERENCE_UNIX_MILLIS as f64 + offset_secs * 1000.0).round();
    if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

/// Inverse of [`offset_to_date`].
pub fn date_to_offset(date: &DateTime<Utc>) -> f64 {
    (date.timestamp_millis() - REFERENCE_UNIX_MILLIS) as f64 / 1000.0
}

#[cfg(test)]
#[path = "tests/timestamp_tests.rs"]
mod tests;
