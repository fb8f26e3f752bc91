//! Input Validation
//!
//! Pure validators for account inputs. Every violation is collected; none
//! short-circuits the others.

use kernel::error::field::ValidationErrors;
use kernel::validate::{is_blank, is_email, is_present_with_min_length};

use crate::domain::value_object::{
    account_status::MISSING_STATUS_MESSAGE, email::INVALID_EMAIL_MESSAGE,
};

pub const MIN_PASSWORD_LENGTH: usize = 5;

pub fn validate_signup(email: &str, password: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.check(!is_email(email), INVALID_EMAIL_MESSAGE);
    errors.check(
        !is_present_with_min_length(password, MIN_PASSWORD_LENGTH),
        "Password does not meet minimum length criteria!",
    );
    errors
}

/// Same checks as signup; callers report these as a failed login
pub fn validate_login(email: &str, password: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.check(!is_email(email), INVALID_EMAIL_MESSAGE);
    errors.check(
        !is_present_with_min_length(password, MIN_PASSWORD_LENGTH),
        "Invalid password!",
    );
    errors
}

pub fn validate_status(status: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.check(is_blank(status), MISSING_STATUS_MESSAGE);
    errors
}
