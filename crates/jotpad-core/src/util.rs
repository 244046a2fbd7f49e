//! Shared utility functions used across multiple modules.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Format used for the "updated" label of a list item,
/// e.g. `Friday, October 16, 2026 at 3:04 PM`.
pub const UPDATED_LABEL_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M %p";

/// Truncate text to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_with_ellipsis(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Trim leading/trailing whitespace from an editor field.
pub fn normalize_field(value: &str) -> String {
    value.trim().to_string()
}

/// Trimmed value, or `None` when absent or blank.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Human-readable timestamp in the local time zone.
pub fn format_updated(updated: &DateTime<Utc>) -> String {
    format_updated_in(updated, &Local)
}

/// Human-readable timestamp in an explicit time zone.
pub fn format_updated_in<Tz>(updated: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    updated
        .with_timezone(tz)
        .format(UPDATED_LABEL_FORMAT)
        .to_string()
}
