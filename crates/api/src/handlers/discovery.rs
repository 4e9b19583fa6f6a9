//! Handlers describing the API itself.
//!
//! `list_routes` exercises the collection envelope with pagination;
//! `echo_status` lets clients check how they handle a given status code.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use envelope_core::types::JsonMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{JsonApiResource, JsonApiResourceCollection};

/// One entry of the route index.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Every route the server mounts, in mount order.
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        method: "GET",
        path: "/health",
        description: "Service health",
    },
    RouteInfo {
        method: "GET",
        path: "/api-docs/openapi.json",
        description: "OpenAPI document for the response envelope",
    },
    RouteInfo {
        method: "GET",
        path: "/api/v1/routes",
        description: "Paginated route index",
    },
    RouteInfo {
        method: "GET",
        path: "/api/v1/status/{code}",
        description: "Empty envelope carrying the requested status",
    },
];

/// GET /api/v1/routes
///
/// List mounted routes, windowed by `?limit=&offset=`.
pub async fn list_routes(
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<JsonApiResourceCollection<RouteInfo>> {
    let Query(params) = query?;
    let window = params.window(ROUTES.len());

    Ok(
        JsonApiResource::collection(ROUTES[window].iter().copied(), JsonMap::new(), Vec::new())
            .with_pagination(params.page(ROUTES.len() as i64)),
    )
}

/// GET /api/v1/status/{code}
///
/// Respond with an empty envelope whose `meta.status` and HTTP status are
/// `code`. Codes outside `100..=999` and informational `1xx` codes, which
/// cannot be sent as a final response, are rejected with 400.
pub async fn echo_status(
    path: Result<Path<u16>, PathRejection>,
) -> AppResult<JsonApiResource<Value>> {
    let Path(code) = path?;

    if (100..200).contains(&code) {
        return Err(AppError::BadRequest(format!(
            "{code} is an informational status and cannot be echoed"
        )));
    }

    let resource = JsonApiResource::<Value>::empty()
        .try_with_status(code)?
        .with_meta_entry("echo", true);

    tracing::debug!(code, "Echoing requested status");

    Ok(resource)
}
