//! Field-level validation for question input.
//!
//! Length bounds are counted in Unicode scalar values, matching the
//! `char_length` CHECK constraints in the schema. Running these checks
//! before any SQL executes turns a would-be constraint violation into a
//! [`CoreError::Validation`] with a readable message.

use crate::error::CoreError;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 30;

/// Maximum content length in characters.
pub const CONTENT_MAX_CHARS: usize = 100;

/// Check a title against the required/max-length rules.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_text_field("title", title, TITLE_MAX_CHARS)
}

/// Check question content against the required/max-length rules.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    validate_text_field("content", content, CONTENT_MAX_CHARS)
}

fn validate_text_field(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_chars {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_chars} characters, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_title_at_limit() {
        assert!(validate_title(&"x".repeat(TITLE_MAX_CHARS)).is_ok());
    }

    #[test]
    fn rejects_title_over_limit() {
        let result = validate_title(&"x".repeat(TITLE_MAX_CHARS + 1));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("title"));
    }

    #[test]
    fn rejects_empty_title() {
        assert_matches!(validate_title("   "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn accepts_content_at_limit() {
        assert!(validate_content(&"y".repeat(CONTENT_MAX_CHARS)).is_ok());
    }

    #[test]
    fn rejects_content_over_limit() {
        let result = validate_content(&"y".repeat(CONTENT_MAX_CHARS + 1));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("content"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 30 multi-byte characters are within the title limit even though
        // the byte length is far larger.
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(title.len() > TITLE_MAX_CHARS);
        assert!(validate_title(&title).is_ok());
    }
}
