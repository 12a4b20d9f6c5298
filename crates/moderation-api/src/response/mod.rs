//! Response types and error handling for API endpoints
//!
//! Every failure is rendered as `{ "error": "<message>" }`. Panics are
//! answered with `INTERNAL_ERROR_MESSAGE` by the middleware.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use moderation_common::ErrorResponse;
use moderation_service::ServiceError;
use thiserror::Error;
use tracing::debug;

/// Message returned for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
            }
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        debug!(code = self.error_code(), status = status.as_u16(), "Request rejected");
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
