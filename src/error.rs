//! Error types for the shortener service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Shortener Error Enum ==
/// Unified error type for the shortener service.
#[derive(Error, Debug)]
pub enum ShortenerError {
    /// No stored key matches the requested prefix
    #[error("No entry found for key: {0}")]
    NotFound(String),

    /// The submitted URL is not syntactically valid
    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ShortenerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ShortenerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ShortenerError::InvalidUrl(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ShortenerError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the shortener service.
pub type Result<T> = std::result::Result<T, ShortenerError>;
