use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use envelope_core::envelope::ErrorEntry;
use envelope_core::error::CoreError;
use serde_json::Value;

use crate::response::JsonApiResource;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every error is rendered in the standard
/// envelope: empty `data`, `meta.status` set to the HTTP status and a single
/// `{ "code", "message" }` entry in `errors`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `envelope_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A payload could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched the request path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status, machine-readable code and client-safe message.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::InvalidStatusCode(code)) => (
                StatusCode::BAD_REQUEST,
                "INVALID_STATUS",
                format!("{code} is not a valid HTTP status code"),
            ),

            // --- Serialization ---
            AppError::Serialization(err) => {
                tracing::error!(error = %err, "Failed to serialize response payload");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        JsonApiResource::<Value>::empty()
            .with_status(status)
            .with_error(ErrorEntry::new(code, message))
            .into_response()
    }
}
