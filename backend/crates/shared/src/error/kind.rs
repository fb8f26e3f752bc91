//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by the REST surface and the
//! operation surface.

use serde::Serialize;

/// Error classification
///
/// Machine-readable error classes. Each variant carries an HTTP status code
/// and a stable code string.
///
/// ## Notes
/// * `InvalidCredentials` is the login-only class, distinct from `ValidationFailed`
/// * Unknown email and wrong password share the same class
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.code(), "NOT_FOUND");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// 422 - Input validation failed (carries the field list)
    ValidationFailed,
    /// 401 - Login failed (bad shape, unknown email or wrong password)
    InvalidCredentials,
    /// 401 - No valid identity
    Unauthenticated,
    /// 403 - Authenticated but not the owner
    Forbidden,
    /// 404 - Target does not exist
    NotFound,
    /// 409 - Unique constraint violated (duplicate email)
    AlreadyExists,
    /// 500 - Internal error such as a storage fault
    Internal,
}

impl ErrorKind {
    /// HTTP status code
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::ValidationFailed.status_code(), 422);
    /// assert_eq!(ErrorKind::Forbidden.status_code(), 403);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::ValidationFailed => 422,
            ErrorKind::InvalidCredentials => 401,
            ErrorKind::Unauthenticated => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::AlreadyExists => 409,
            ErrorKind::Internal => 500,
        }
    }

    /// Stable code string
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailed => "VALIDATION_FAILED",
            ErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::AlreadyExists => "ALREADY_EXISTS",
            ErrorKind::Internal => "INTERNAL",
        }
    }

    /// Human-readable name
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailed => "Validation Failed",
            ErrorKind::InvalidCredentials => "Invalid Credentials",
            ErrorKind::Unauthenticated => "Unauthenticated",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::AlreadyExists => "Already Exists",
            ErrorKind::Internal => "Internal Server Error",
        }
    }

    /// True for 5xx errors
    ///
    /// Their details are logged, never returned to the caller.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::ValidationFailed.status_code(), 422);
        assert_eq!(ErrorKind::InvalidCredentials.status_code(), 401);
        assert_eq!(ErrorKind::Unauthenticated.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::AlreadyExists.status_code(), 409);
        assert_eq!(ErrorKind::Internal.status_code(), 500);
    }

    #[test]
    fn test_login_class_is_distinct_from_validation() {
        assert_ne!(
            ErrorKind::InvalidCredentials.code(),
            ErrorKind::ValidationFailed.code()
        );
        assert_ne!(
            ErrorKind::InvalidCredentials.code(),
            ErrorKind::Unauthenticated.code()
        );
    }

    #[test]
    fn test_is_server_error() {
        assert!(!ErrorKind::ValidationFailed.is_server_error());
        assert!(!ErrorKind::NotFound.is_server_error());
        assert!(ErrorKind::Internal.is_server_error());
    }

    #[test]
    fn test_serialize_as_code() {
        let json = serde_json::to_string(&ErrorKind::AlreadyExists).unwrap();
        assert_eq!(json, r#""ALREADY_EXISTS""#);
    }
}
