//! Form-level validation errors.
//!
//! Every admin form reports problems as a single [`ValidationError`] naming
//! the offending field, a stable code, and a human-readable message.

use serde::Serialize;
use thiserror::Error;

/// A validation failure attached to one form field.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

/// Checks a required text field against its maximum length.
///
/// Blank (whitespace-only) values count as missing.
pub(crate) fn check_text(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            field,
            "required",
            "This field is required.",
        ));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(ValidationError::new(
            field,
            "max_length",
            format!("Ensure this value has at most {max_len} characters (it has {len})."),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_field() {
        let error = ValidationError::new("value", "Invalid_ARN", "Invalid AWS ARN");
        assert_eq!(error.to_string(), "value: Invalid AWS ARN");
    }

    #[test]
    fn test_check_text_blank_is_required() {
        let error = check_text("name", "   ", 10).unwrap_err();
        assert_eq!(error.code, "required");
        assert_eq!(error.field, "name");
    }

    #[test]
    fn test_check_text_counts_characters_not_bytes() {
        assert!(check_text("name", "ñandú", 5).is_ok());
        let error = check_text("name", "ñandúes", 5).unwrap_err();
        assert_eq!(error.code, "max_length");
        assert!(error.message.contains("it has 7"));
    }
}
