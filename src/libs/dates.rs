//! Date-key and relative-time helpers.
//!
//! Collections key their daily data by `YYYY-MM-DD` strings in local time.
//! This module owns that format plus the small derivations built on it:
//! the trailing 7-day window used by habit history and the relative-time
//! labels shown next to recently updated notes.

use chrono::{DateTime, Days, Local, NaiveDate};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// Formats a date as a zero-padded `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date key in local time.
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/// Yesterday's date key in local time.
pub fn yesterday_key() -> String {
    date_key(Local::now().date_naive().pred_opt().unwrap_or(Local::now().date_naive()))
}

/// Normalizes a user-supplied date string to the canonical key format.
///
/// A string already in canonical form passes through unchanged; anything
/// that does not parse as `YYYY-MM-DD` is rejected.
pub fn to_date_key(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok().map(date_key)
}

/// The last 7 date keys ending at `anchor`, oldest first, anchor inclusive.
pub fn last_7_days(anchor: NaiveDate) -> Vec<String> {
    (0..7)
        .rev()
        .map(|offset| date_key(anchor.checked_sub_days(Days::new(offset)).unwrap_or(anchor)))
        .collect()
}

/// Human-readable age of a millisecond timestamp relative to `now_ms`.
///
/// Labels: "Just now" under a minute, then "{n}m ago", "{n}h ago",
/// "{n}d ago", and a plain date once the age reaches a week.
pub fn relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms - timestamp_ms;
    let minutes = diff / MINUTE_MS;
    let hours = diff / HOUR_MS;
    let days = diff / DAY_MS;

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    if days < 7 {
        return format!("{}d ago", days);
    }

    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(ts) => ts.with_timezone(&Local).format("%x").to_string(),
        None => String::new(),
    }
}

/// Current time as a millisecond timestamp.
pub fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}
