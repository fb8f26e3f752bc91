//! Email Value Object
//!
//! Represents an email address that passed the standard email grammar.
//! Stored exactly as supplied; lookups are case-sensitive.

use kernel::error::app_error::{AppError, AppResult};
use kernel::error::field::ValidationErrors;
use kernel::validate::is_email;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email!";

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if !is_email(&email) {
            let mut errors = ValidationErrors::new();
            errors.push(INVALID_EMAIL_MESSAGE);
            return Err(AppError::validation(errors));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        for raw in [
            "",
            "userexample.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "a@localhost",
            "a@x",
        ] {
            let err = Email::new(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValidationFailed, "{raw}");
            assert_eq!(
                err.data().unwrap().iter().next().unwrap().message,
                INVALID_EMAIL_MESSAGE
            );
        }
    }

    #[test]
    fn test_email_kept_as_supplied() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");
        assert_ne!(email, Email::new("user@example.com").unwrap());
    }

    #[test]
    fn test_email_serializes_as_string() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"user@example.com\"");
    }
}
