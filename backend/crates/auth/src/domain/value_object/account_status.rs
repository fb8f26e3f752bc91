//! Account Status Value Object
//!
//! Free-text status line owned by the account. Any non-blank text is
//! accepted; the value is stored as supplied.

use kernel::error::app_error::{AppError, AppResult};
use kernel::error::field::ValidationErrors;
use kernel::validate::is_blank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status every new account starts with
pub const DEFAULT_STATUS: &str = "I am new!";

pub const MISSING_STATUS_MESSAGE: &str = "Status not received!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountStatus(String);

impl AccountStatus {
    pub fn new(status: impl Into<String>) -> AppResult<Self> {
        let status = status.into();

        if is_blank(&status) {
            let mut errors = ValidationErrors::new();
            errors.push(MISSING_STATUS_MESSAGE);
            return Err(AppError::validation(errors));
        }

        Ok(Self(status))
    }

    /// Create from database value
    pub fn from_db(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl Default for AccountStatus {
    fn default() -> Self {
        Self(DEFAULT_STATUS.to_string())
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status() {
        assert_eq!(AccountStatus::default().as_str(), "I am new!");
    }

    #[test]
    fn test_blank_status_rejected() {
        assert!(AccountStatus::new("").is_err());
        assert!(AccountStatus::new("   ").is_err());
    }

    #[test]
    fn test_status_stored_as_supplied() {
        let status = AccountStatus::new("  busy  ").unwrap();
        assert_eq!(status.as_str(), "  busy  ");
    }
}
