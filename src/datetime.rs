//! Date string and millisecond-timestamp conversion.
//!
//! Conversions run through the local timezone, matching what a person
//! reading the formatted string expects. Timestamps are Unix epoch
//! milliseconds.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, TimeZone};

/// Date format used when the caller does not supply one.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a local-time date string into Unix epoch milliseconds.
///
/// # Errors
///
/// Returns an error when the string does not match `date_format`, or when
/// the wall-clock time is ambiguous or skipped in the local timezone
/// (daylight-saving transitions).
pub fn date_to_timestamp(date: &str, date_format: &str) -> Result<i64> {
    let naive = NaiveDateTime::parse_from_str(date, date_format)
        .with_context(|| format!("'{date}' does not match the date format '{date_format}'"))?;
    let local = Local
        .from_local_datetime(&naive)
        .single()
        .with_context(|| format!("'{date}' is not an unambiguous local time"))?;
    Ok(local.timestamp_millis())
}

/// Format Unix epoch milliseconds as a local-time date string.
///
/// # Errors
///
/// Returns an error when the timestamp is outside chrono's representable
/// range.
pub fn timestamp_to_date(timestamp_ms: i64, date_format: &str) -> Result<String> {
    let datetime = Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .with_context(|| format!("{timestamp_ms} is out of range for a millisecond timestamp"))?;
    Ok(datetime.format(date_format).to_string())
}

/// The current local time, formatted.
#[must_use]
pub fn current_time(date_format: &str) -> String {
    Local::now().format(date_format).to_string()
}

/// The current Unix timestamp in milliseconds.
#[must_use]
pub fn current_timestamp() -> i64 {
    Local::now().timestamp_millis()
}
