//! Feed Error Types
//!
//! Feed-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::{AuthError, PolicyViolation};
use kernel::error::{
    app_error::{AppError, INTERNAL_MESSAGE},
    field::ValidationErrors,
    kind::ErrorKind,
};
use thiserror::Error;

/// Feed-specific result type alias
pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Field violations on post input or id
    #[error("Validation failed!")]
    Validation(ValidationErrors),

    /// No valid identity on the call
    #[error("User not authenticated!")]
    Unauthenticated,

    /// Token is valid but its account no longer exists
    #[error("Invalid user!")]
    InvalidUser,

    /// Caller did not create the post
    #[error("Not authorized!")]
    Forbidden,

    #[error("Post not found!")]
    PostNotFound,

    /// Failure in the account store
    #[error(transparent)]
    Account(#[from] AuthError),

    /// Image resource could not be removed
    #[error("Image removal failed: {0}")]
    Image(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FeedError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedError::Validation(_) => ErrorKind::ValidationFailed,
            FeedError::Unauthenticated | FeedError::InvalidUser => ErrorKind::Unauthenticated,
            FeedError::Forbidden => ErrorKind::Forbidden,
            FeedError::PostNotFound => ErrorKind::NotFound,
            FeedError::Account(e) => e.kind(),
            FeedError::Image(_) | FeedError::Database(_) | FeedError::Internal(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Convert to AppError
    ///
    /// Internal causes are replaced by the generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            FeedError::Validation(errors) => {
                AppError::new(self.kind(), self.to_string()).with_data(errors.clone())
            }
            FeedError::Account(e) => e.to_app_error(),
            FeedError::Image(_) | FeedError::Database(_) | FeedError::Internal(_) => {
                AppError::internal(INTERNAL_MESSAGE)
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            FeedError::Account(e) => e.log(),
            FeedError::Database(e) => {
                tracing::error!(error = %e, "Feed database error");
            }
            FeedError::Image(msg) | FeedError::Internal(msg) => {
                tracing::error!(message = %msg, "Feed internal error");
            }
            FeedError::Forbidden => {
                tracing::warn!("Forbidden post operation");
            }
            _ => {
                tracing::debug!(error = %self, "Feed error");
            }
        }
    }
}

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        let app = err.to_app_error();
        if app.is_server_error() {
            app.with_source(err)
        } else {
            app
        }
    }
}

impl From<PolicyViolation> for FeedError {
    fn from(violation: PolicyViolation) -> Self {
        match violation {
            PolicyViolation::Unauthenticated => FeedError::Unauthenticated,
            PolicyViolation::Forbidden => FeedError::Forbidden,
        }
    }
}
