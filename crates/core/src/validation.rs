//! Field-level validation primitives.
//!
//! Rules are plain functions that return `Some(FieldError)` when the value
//! violates the constraint. Callers collect every violation instead of
//! stopping at the first one, so a client sees all problems in one response.

use serde::{Deserialize, Serialize};
use validator::ValidateLength;

/// A single violated input constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field as it appears in the request body.
    pub field: String,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Reject a value that is absent, empty, or made only of blank characters.
///
/// A blank character is any code point at or below U+0020 (space and the
/// ASCII control characters). Other Unicode spaces such as U+00A0 count as
/// content.
pub fn require_not_blank(
    field: &str,
    value: Option<&String>,
    message: &str,
) -> Option<FieldError> {
    match value {
        Some(v) if !trim_blank(v).is_empty() => None,
        _ => Some(FieldError::new(field, message)),
    }
}

fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Reject a value longer than `max` characters. Absent values pass.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn require_max_chars(
    field: &str,
    value: Option<&String>,
    max: u64,
    message: &str,
) -> Option<FieldError> {
    match value {
        Some(v) if !v.validate_length(None, Some(max), None) => {
            Some(FieldError::new(field, message))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_rejects_missing_empty_and_whitespace() {
        assert!(require_not_blank("name", None, "blank").is_some());
        assert!(require_not_blank("name", Some(&String::new()), "blank").is_some());
        assert!(require_not_blank("name", Some(&" \t\n ".to_string()), "blank").is_some());
    }

    #[test]
    fn not_blank_treats_control_characters_as_blank() {
        assert!(require_not_blank("name", Some(&"\u{0001}".to_string()), "blank").is_some());
        assert!(require_not_blank("name", Some(&"\0\r\u{001F}".to_string()), "blank").is_some());
    }

    #[test]
    fn not_blank_treats_non_ascii_spaces_as_content() {
        assert_eq!(require_not_blank("name", Some(&"\u{00A0}".to_string()), "blank"), None);
        assert_eq!(require_not_blank("name", Some(&"\u{3000}".to_string()), "blank"), None);
    }

    #[test]
    fn not_blank_accepts_text_with_surrounding_whitespace() {
        assert_eq!(require_not_blank("name", Some(&"  a  ".to_string()), "blank"), None);
    }

    #[test]
    fn not_blank_reports_field_and_message() {
        let err = require_not_blank("name", None, "must be set").unwrap();
        assert_eq!(err, FieldError::new("name", "must be set"));
    }

    #[test]
    fn max_chars_boundary() {
        let at_limit = "x".repeat(10);
        let over_limit = "x".repeat(11);
        assert_eq!(require_max_chars("name", Some(&at_limit), 10, "long"), None);
        assert!(require_max_chars("name", Some(&over_limit), 10, "long").is_some());
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        // Ten two-byte characters.
        let accented = "é".repeat(10);
        assert_eq!(accented.len(), 20);
        assert_eq!(require_max_chars("name", Some(&accented), 10, "long"), None);
    }

    #[test]
    fn max_chars_ignores_absent_value() {
        assert_eq!(require_max_chars("name", None, 0, "long"), None);
    }
}
