use axum::extract::{Request, State};
use axum::response::Response;
use axum::{routing::get, Router};
use serde::Serialize;

use crate::response::{JsonApiResource, ToResponse};
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}

/// GET /health -- returns service health in the standard envelope.
async fn health_check(State(state): State<AppState>, request: Request) -> Response {
    let (parts, _body) = request.into_parts();

    JsonApiResource::new(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
    .to_response(&parts)
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
