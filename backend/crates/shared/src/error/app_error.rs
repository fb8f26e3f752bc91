//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::field::ValidationErrors;
use super::kind::ErrorKind;

/// Generic message returned to callers for internal errors
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Unified application error
///
/// The error type crossing both call surfaces. Every failure site builds a
/// fresh value.
///
/// ## Fields
/// * `kind` - Error class (maps to status code and code string)
/// * `message` - User-facing message
/// * `data` - Field-level details (optional, for validation errors)
/// * `source` - Underlying error (optional, server-side diagnostics)
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, field::ValidationErrors, kind::ErrorKind};
///
/// // Plain error
/// let err = AppError::new(ErrorKind::NotFound, "No post found!");
///
/// // Error with details
/// let mut errors = ValidationErrors::new();
/// errors.push("Invalid title!");
/// let err = AppError::validation(errors);
/// assert_eq!(err.data().map(|d| d.len()), Some(1));
/// ```
pub struct AppError {
    /// Error class
    kind: ErrorKind,
    /// User-facing message
    message: Cow<'static, str>,
    /// Field-level details
    data: Option<ValidationErrors>,
    /// Underlying error (for debugging)
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Application result type alias
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::{AppError, AppResult};
///
/// fn find_post(id: u32) -> AppResult<String> {
///     if id == 0 {
///         return Err(AppError::not_found("No post found!"));
///     }
///     Ok("Hello".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new error
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            data: None,
            source: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 422 validation error with its field list
    #[inline]
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::new(ErrorKind::ValidationFailed, "Validation failed!").with_data(errors)
    }

    /// 401 failed login
    #[inline]
    pub fn invalid_credentials(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidCredentials, message)
    }

    /// 401 unauthenticated
    #[inline]
    pub fn unauthenticated(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// 403 forbidden
    #[inline]
    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// 404 Not Found
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 409 duplicate
    #[inline]
    pub fn already_exists(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    /// 500 internal error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Attach field-level details
    #[inline]
    pub fn with_data(mut self, data: ValidationErrors) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach the underlying error (for debugging)
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn read_config() -> AppResult<()> {
    ///     std::fs::read_to_string("config.json")
    ///         .map_err(|e| AppError::internal("Failed to read config").with_source(e))?;
    ///     Ok(())
    /// }
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Error class
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status code
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Message for server-side diagnostics (may contain internal detail)
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message safe to return to the caller
    ///
    /// Internal errors are replaced by the generic message.
    #[inline]
    pub fn public_message(&self) -> &str {
        if self.kind.is_server_error() {
            INTERNAL_MESSAGE
        } else {
            &self.message
        }
    }

    /// Field-level details
    #[inline]
    pub fn data(&self) -> Option<&ValidationErrors> {
        self.data.as_ref()
    }

    /// True for 5xx errors
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(data) = &self.data {
            builder.field("data", data);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(data) = &self.data {
            write!(f, " ({})", data)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
