//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{
    app_error::{AppError, INTERNAL_MESSAGE},
    field::ValidationErrors,
    kind::ErrorKind,
};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message shared by every login failure
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password!";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Field violations on signup or status update
    #[error("Validation failed!")]
    Validation(ValidationErrors),

    /// Login input failed the shape checks
    #[error("Invalid login input!")]
    LoginRejected(ValidationErrors),

    /// Unknown email or wrong password
    #[error("{INVALID_CREDENTIALS_MESSAGE}")]
    InvalidCredentials,

    /// Email already registered
    #[error("User exists already!")]
    EmailTaken,

    /// No valid identity on the call
    #[error("User not authenticated!")]
    Unauthenticated,

    /// Account referenced by a valid token no longer exists
    #[error("User not found!")]
    AccountNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::ValidationFailed,
            AuthError::LoginRejected(_) | AuthError::InvalidCredentials => {
                ErrorKind::InvalidCredentials
            }
            AuthError::EmailTaken => ErrorKind::AlreadyExists,
            AuthError::Unauthenticated => ErrorKind::Unauthenticated,
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    ///
    /// Internal causes are replaced by the generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(errors) | AuthError::LoginRejected(errors) => {
                AppError::new(self.kind(), self.to_string()).with_data(errors.clone())
            }
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal(INTERNAL_MESSAGE)
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials | AuthError::LoginRejected(_) => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let app = err.to_app_error();
        if app.is_server_error() {
            app.with_source(err)
        } else {
            app
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match (err.kind(), err.data()) {
            (ErrorKind::ValidationFailed, Some(errors)) => AuthError::Validation(errors.clone()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
