//! Validation utilities for registration and login input.

use passgate_core::PassgateError;
use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationErrors;

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Email validation regex (simplified RFC 5322).
static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").ok()
});

/// Specific email validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    /// Email is empty.
    Empty,
    /// Email is too long.
    TooLong { max: usize, actual: usize },
    /// Email format is invalid.
    InvalidFormat,
}

impl std::fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Email address is required"),
            Self::TooLong { max, actual } => {
                write!(f, "Email too long: {actual} characters (maximum {max})")
            }
            Self::InvalidFormat => write!(f, "Invalid email format"),
        }
    }
}

/// Validate an email address.
///
/// # Errors
///
/// Returns the first rule the address breaks.
pub fn validate_email(email: &str) -> Result<(), EmailValidationError> {
    if email.is_empty() {
        return Err(EmailValidationError::Empty);
    }

    let len = email.len();
    if len > MAX_EMAIL_LENGTH {
        return Err(EmailValidationError::TooLong {
            max: MAX_EMAIL_LENGTH,
            actual: len,
        });
    }

    match EMAIL_REGEX.as_ref() {
        Some(regex) if regex.is_match(email) => Ok(()),
        _ => Err(EmailValidationError::InvalidFormat),
    }
}

/// Normalize an email for storage and comparison (trim + lowercase).
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Collapse derive-validator errors into one `Validation` error.
///
/// Fields are reported in name order so the message is stable.
#[must_use]
pub fn into_validation_error(errors: &ValidationErrors) -> PassgateError {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "is invalid".to_string());
            (field.to_string(), message)
        })
        .collect();
    fields.sort();

    match fields.into_iter().next() {
        Some((field, message)) => PassgateError::validation(field, message),
        None => PassgateError::validation("body", "is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email_validation {
        use super::*;

        #[test]
        fn valid_email() {
            assert!(validate_email("ann@x.com").is_ok());
            assert!(validate_email("first.last+tag@sub.example.org").is_ok());
        }

        #[test]
        fn empty_email() {
            assert_eq!(validate_email(""), Err(EmailValidationError::Empty));
        }

        #[test]
        fn too_long() {
            let email = format!("{}@x.com", "a".repeat(255));
            assert!(matches!(
                validate_email(&email),
                Err(EmailValidationError::TooLong { max: 255, .. })
            ));
        }

        #[test]
        fn invalid_format() {
            assert_eq!(
                validate_email("not-an-email"),
                Err(EmailValidationError::InvalidFormat)
            );
            assert_eq!(
                validate_email("ann@"),
                Err(EmailValidationError::InvalidFormat)
            );
            assert_eq!(
                validate_email("ann x@x.com"),
                Err(EmailValidationError::InvalidFormat)
            );
        }
    }

    mod normalization {
        use super::*;

        #[test]
        fn lowercases_and_trims() {
            assert_eq!(normalize_email("  Ann@X.Com "), "ann@x.com");
        }
    }
}
