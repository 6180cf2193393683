//! String formatting utilities for UI rendering.

use chrono::{DateTime, NaiveDate, Utc};

use shelf_core::store::MIN_ID_PREFIX;

/// Shortest id shown in pretty listings.
const SHORT_ID_LEN: usize = 8;

/// Truncate a string to `max_len` characters, adding an ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Pad a string to a fixed width (left-aligned).
pub fn pad_right(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - count))
    }
}

/// Shortest prefix of `id` that no other id in `ids` starts with, and never
/// shorter than eight characters. The result always resolves back to `id`
/// through the store's prefix lookup.
pub fn short_id<'a>(id: &str, ids: impl IntoIterator<Item = &'a str>) -> String {
    let needed = ids
        .into_iter()
        .filter(|other| *other != id)
        .map(|other| {
            id.chars()
                .zip(other.chars())
                .take_while(|(a, b)| a == b)
                .count()
                + 1
        })
        .max()
        .unwrap_or(0);
    let len = needed.max(SHORT_ID_LEN).max(MIN_ID_PREFIX);
    id.chars().take(len).collect()
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Pretty mode shows minutes in UTC, plain mode the full RFC 3339 value.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        dt.to_rfc3339()
    }
}
