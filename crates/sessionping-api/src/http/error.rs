//! Application error type mapping to HTTP status codes and the
//! `{"success": false, "error": "..."}` wire shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use sessionping_types::error::RelayError;

/// Application-level error that maps to HTTP responses.
///
/// Validation errors are the caller's fault (4xx) and carry their
/// message to the client. Store and other internal faults become a
/// generic 500 with no detail leaked; the detail goes to the log.
#[derive(Debug)]
pub enum AppError {
    /// Client sent an unparsable body.
    Malformed(String),
    /// Key absent or empty.
    MissingKey,
    /// Key well-formed but unresolvable.
    InvalidKey,
    /// Store failure or any other uncaught fault.
    Internal(String),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        match e {
            RelayError::Malformed(msg) => AppError::Malformed(msg),
            RelayError::MissingKey => AppError::MissingKey,
            RelayError::InvalidKey => AppError::InvalidKey,
            RelayError::Store(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Malformed(msg) => {
                (StatusCode::BAD_REQUEST, format!("Malformed JSON: {msg}"))
            }
            AppError::MissingKey => (StatusCode::BAD_REQUEST, "Missing key".to_string()),
            AppError::InvalidKey => (StatusCode::UNAUTHORIZED, "Invalid key".to_string()),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({ "success": false, "error": message }));
        (status, body).into_response()
    }
}
