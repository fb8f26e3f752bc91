//! Response envelopes for the operation surface

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, field::ValidationErrors};
use serde::Serialize;
use thiserror::Error;

/// Successful result: `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Failed result: `{"errors": [...]}`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEntry {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ValidationErrors>,
    /// Numeric status of the failure class
    pub code: u16,
}

impl From<&AppError> for ErrorEntry {
    fn from(err: &AppError) -> Self {
        Self {
            message: err.public_message().to_string(),
            data: err.data().cloned(),
            code: err.status_code(),
        }
    }
}

#[derive(Debug, Error)]
pub enum OpsError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid arguments for {operation}: {reason}")]
    InvalidArguments { operation: String, reason: String },

    /// The operation ran and failed
    #[error(transparent)]
    Failed(AppError),
}

impl IntoResponse for OpsError {
    fn into_response(self) -> Response {
        let (status, entry) = match &self {
            OpsError::Failed(err) => (StatusCode::OK, ErrorEntry::from(err)),
            _ => {
                tracing::debug!(error = %self, "Rejected operation request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorEntry {
                        message: self.to_string(),
                        data: None,
                        code: StatusCode::BAD_REQUEST.as_u16(),
                    },
                )
            }
        };

        (
            status,
            Json(ErrorEnvelope {
                errors: vec![entry],
            }),
        )
            .into_response()
    }
}
