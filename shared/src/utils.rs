//! # Shared Utility Functions
//!
//! Display helpers used by the client UI.
//!
//! - [`truncate_label`] - Shorten long quote content for chart axis labels
//! - [`format_timestamp`] - Render a backend ISO-8601 timestamp for display

use chrono::{DateTime, Local};

/// Shorten a label to at most `max_chars` characters, appending an ellipsis
/// when truncated. Counts characters, not bytes, so multi-byte content is
/// sliced safely.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_label;
///
/// assert_eq!(truncate_label("Stay hungry, stay foolish", 11), "Stay hungry...");
/// assert_eq!(truncate_label("short", 10), "short");
/// ```
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}

/// Format a backend ISO-8601 timestamp as a local date-time for display.
///
/// Returns the raw string unchanged when it does not parse; the value is
/// display-only and a parse failure should never hide the quote.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Stay hungry, stay foolish", 11), "Stay hungry...");
        assert_eq!(truncate_label("exact", 5), "exact");
        assert_eq!(truncate_label("", 5), "");
    }

    #[test]
    fn test_truncate_label_multibyte() {
        // Thai content must not split inside a character
        let text = "ความพยายามอยู่ที่ไหน ความสำเร็จอยู่ที่นั่น";
        let truncated = truncate_label(text, 10);
        assert!(truncated.ends_with("..."));
        assert!(truncated.chars().count() <= 13);
    }

    #[test]
    fn test_format_timestamp_invalid_passthrough() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_format_timestamp_parses_iso8601() {
        let formatted = format_timestamp("2024-05-01T10:00:00.000Z");
        assert!(formatted.starts_with("2024-05-01") || formatted.starts_with("2024-05-02"));
    }
}
