//! Shared response envelope types for API handlers.
//!
//! All API responses use the `{ "data": ..., "meta": { "status": ... }, "errors": [...] }`
//! envelope. Use [`JsonApiResource`] for a single value and
//! [`JsonApiResourceCollection`] for lists instead of ad-hoc
//! `serde_json::json!` bodies.
//!
//! # Example
//!
//! ```ignore
//! Ok(JsonApiResource::new(project).with_status(StatusCode::CREATED))
//! ```

mod collection;
mod resource;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

pub use collection::JsonApiResourceCollection;
pub use envelope_core::envelope::{ErrorEntry, Meta};
pub use resource::JsonApiResource;

use envelope_core::envelope::Envelope;

use crate::error::AppError;

/// Request information handed to payload and response producers.
pub type RequestContext = axum::http::request::Parts;

/// Produces the `data` member of an envelope for a given request.
pub trait ToPayload {
    fn to_payload(&self, request: &RequestContext) -> serde_json::Result<Value>;
}

/// Produces the full HTTP response for a given request.
pub trait ToResponse {
    fn to_response(self, request: &RequestContext) -> Response;
}

/// Serialize an envelope and propagate its status onto the response.
///
/// The JSON body is always produced with the default `200 OK`; the status is
/// only overwritten when the envelope carries a different one.
pub(crate) fn render(
    data: serde_json::Result<Value>,
    meta: Meta,
    errors: Vec<Value>,
    status: StatusCode,
) -> Response {
    let data = match data {
        Ok(data) => data,
        Err(err) => return AppError::Serialization(err).into_response(),
    };

    let mut response = Json(Envelope { data, meta, errors }).into_response();

    if status != StatusCode::OK {
        tracing::debug!(status = %status, "Applying envelope status to response");
        *response.status_mut() = status;
    }

    response
}
