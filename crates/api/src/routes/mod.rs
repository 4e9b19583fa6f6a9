pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /routes                                          paginated route index
/// /status/{code}                                   empty envelope with the given status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/routes", get(handlers::discovery::list_routes))
        .route("/status/{code}", get(handlers::discovery::echo_status))
}
