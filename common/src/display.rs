//! Formatting helpers for the views.

use chrono::{DateTime, Utc};

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Rough distance between two instants in words, e.g. `"about 3 hours ago"`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = (seconds + 30) / 60;
    let distance = if seconds < 45 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes.max(1), "minute")
    } else if minutes < 60 * 24 {
        format!("about {}", plural(((minutes + 30) / 60).max(1), "hour"))
    } else if minutes < 60 * 24 * 30 {
        plural((minutes + 60 * 12) / (60 * 24), "day")
    } else if minutes < 60 * 24 * 365 {
        plural((minutes / (60 * 24 * 30)).max(1), "month")
    } else {
        format!("about {}", plural(minutes / (60 * 24 * 365), "year"))
    };
    format!("{distance} ago")
}

/// Empty text for `None`, used when filling form inputs.
pub fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// `None` for blank input, used when reading form inputs back.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
