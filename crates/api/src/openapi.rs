//! OpenAPI document describing the response envelope.
//!
//! Served raw (not wrapped in an envelope) so API tooling can consume it.

use axum::{routing::get, Json, Router};
use envelope_core::envelope::ErrorEntry;
use envelope_core::schema::{EnvelopeSchema, MetaSchema};
use utoipa::OpenApi;

use crate::state::AppState;

/// Path the document is served at.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(components(schemas(EnvelopeSchema, MetaSchema, ErrorEntry)))]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Mount the OpenAPI document route (root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}
