//! Error conversions - From implementations for common error types
//!
//! Conversion from serde_json errors to [`AppError`],
//! and the REST rendering of [`AppError`] (feature `axum`).

use super::app_error::AppError;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal("JSON serialization error").with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // REST error envelope: { message, data?, statusCode }
        let mut body = serde_json::json!({
            "message": self.public_message(),
            "statusCode": self.status_code(),
        });
        if let Some(data) = self.data() {
            body["data"] = serde_json::json!(data);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind as Kind;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), Kind::Internal);
    }
}
