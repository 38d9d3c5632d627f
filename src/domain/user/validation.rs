//! User validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Structural email pattern: local part, `@`, and a dotted domain
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Invalid email format: {0}")]
    InvalidEmailFormat(String),
}

/// Validate the structure of an email address
///
/// Rules:
/// - Non-empty local part without whitespace or `@`
/// - Exactly one `@`
/// - Domain with at least one `.` separating non-empty labels
///
/// No DNS or mailbox verification is performed.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmailFormat(email.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+tag@mail.example.co.uk").is_ok());
        assert!(validate_email("x@y.z").is_ok());
    }

    #[test]
    fn test_missing_at() {
        assert_eq!(
            validate_email("not-an-email"),
            Err(UserValidationError::InvalidEmailFormat(
                "not-an-email".to_string()
            ))
        );
    }

    #[test]
    fn test_missing_domain_dot() {
        assert!(validate_email("alice@localhost").is_err());
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(validate_email("al ice@example.com").is_err());
        assert!(validate_email("alice@exa mple.com").is_err());
    }

    #[test]
    fn test_double_at_rejected() {
        assert!(validate_email("a@b@example.com").is_err());
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert!(validate_email("").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@.com").is_err());
        assert!(validate_email("alice@example.").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = validate_email("bogus").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format: bogus");
    }
}
