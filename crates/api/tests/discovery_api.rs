//! HTTP-level integration tests for the route index and status echo endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, get};
use envelope_api::handlers::discovery::ROUTES;
use serde_json::json;

// ---------------------------------------------------------------------------
// Route index
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_routes_returns_collection_with_pagination() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/routes").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), ROUTES.len());
    assert_eq!(data[0]["path"], "/health");
    assert!(data[0].get("meta").is_none());

    assert_eq!(json["meta"]["status"], 200);
    assert_eq!(
        json["meta"]["pagination"],
        json!({"limit": 25, "offset": 0, "total": ROUTES.len(), "has_more": false})
    );
}

#[tokio::test]
async fn list_routes_honours_limit_and_offset() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/routes?limit=1&offset=1").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["path"], ROUTES[1].path);
    assert_eq!(json["meta"]["pagination"]["has_more"], true);
}

#[tokio::test]
async fn list_routes_past_the_end_is_empty() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/routes?offset=50").await;

    let json = body_json(response).await;
    assert_eq!(json["data"], json!([]));
    assert_eq!(json["meta"]["pagination"]["offset"], 50);
}

// ---------------------------------------------------------------------------
// Status echo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_status_applies_requested_status() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/status/418").await;

    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "data": {},
            "meta": {"echo": true, "status": 418},
            "errors": [],
        })
    );
}

#[tokio::test]
async fn echo_status_200_is_not_overridden() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/status/200").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["meta"]["status"], 200);
}

#[tokio::test]
async fn echo_status_rejects_out_of_range_code() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/status/1200").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["meta"]["status"], 400);
    assert_eq!(json["errors"][0]["code"], "INVALID_STATUS");
}

#[tokio::test]
async fn echo_status_rejects_informational_code() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/status/101").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["meta"]["status"], 400);
    assert_eq!(json["errors"][0]["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Extractor rejections use the envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_status_path_returns_envelope() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/status/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let json = body_json(response).await;
    assert_eq!(json["data"], json!({}));
    assert_eq!(json["meta"]["status"], 400);
    assert_eq!(json["errors"][0]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn status_path_above_u16_returns_envelope() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/status/70000").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_numeric_limit_returns_envelope() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/routes?limit=x").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let json = body_json(response).await;
    assert_eq!(json["meta"]["status"], 400);
    assert_eq!(json["errors"][0]["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Large offsets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_routes_with_max_offset_returns_empty_page() {
    let app = common::build_test_app();
    let response = get(app, &format!("/api/v1/routes?offset={}", i64::MAX)).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], json!([]));
    assert_eq!(json["meta"]["pagination"]["offset"], i64::MAX);
    assert_eq!(json["meta"]["pagination"]["has_more"], false);
}
