//! HTTP boundary errors.
//!
//! Each handler step returns its own error type; this module maps them onto status codes
//! and a JSON `{"detail": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::transform::TransformError;
use crate::upstream::{FetchError, InvalidUrl};

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing query parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrl),

    #[error("Error fetching subscription: {0}")]
    Fetch(#[from] FetchError),

    #[error("Error converting subscription: {0}")]
    Transform(#[from] TransformError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidUrl(_) | ApiError::Fetch(_) => StatusCode::BAD_REQUEST,
            ApiError::Transform(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for metrics and logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::MissingParameter(_) => "missing_parameter",
            ApiError::InvalidUrl(_) => "invalid_url",
            ApiError::Fetch(FetchError::Timeout(_)) => "fetch_timeout",
            ApiError::Fetch(_) => "fetch_error",
            ApiError::Transform(TransformError::NotLoaded(_)) => "mixin_not_loaded",
            ApiError::Transform(_) => "transform_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
