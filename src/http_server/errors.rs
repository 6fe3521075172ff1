//! Route-boundary errors
//!
//! Two recognized kinds: field-level validation failures (400) and internal
//! faults (500, generic operation-specific message, no detail leaked). The two
//! read-only GET routes use a bare `{error}` body while writes use
//! `{success:false, error}`; the asymmetry is observable API behavior and is
//! kept as-is. Malformed request bodies fall through to the catch-all
//! `{message}` shape with the extractor's status.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::schema::FieldError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a route handler can surface
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Payload failed schema validation
    #[error("Validation failed")]
    Validation { details: Vec<FieldError> },

    /// Internal fault on a write route
    #[error("{0}")]
    Write(&'static str),

    /// Internal fault on a read route
    #[error("{0}")]
    Read(&'static str),

    /// Malformed request body (catch-all fallback)
    #[error("{message}")]
    Malformed { status: u16, message: String },
}

impl ApiError {
    /// Wrap collected field errors
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self::Validation { details }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Write(_) | ApiError::Read(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Malformed { status, .. } => StatusCode::from_u16(*status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation { details } => json!({
                "success": false,
                "error": "Validation failed",
                "details": details,
            }),
            ApiError::Write(message) => json!({
                "success": false,
                "error": message,
            }),
            ApiError::Read(message) => json!({
                "error": message,
            }),
            ApiError::Malformed { message, .. } => json!({
                "message": message,
            }),
        };
        (status, Json(body)).into_response()
    }
}
