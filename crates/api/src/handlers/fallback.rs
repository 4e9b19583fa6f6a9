use axum::http::Uri;

use crate::error::AppError;

/// Catch-all for unmatched paths: a 404 error envelope instead of an empty body.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
