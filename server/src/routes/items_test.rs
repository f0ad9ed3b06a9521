use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

// =============================================================================
// item_error_to_api
// =============================================================================

#[test]
fn invalid_payload_maps_to_bad_request_with_message() {
    let api = item_error_to_api(ItemError::Invalid("Sticky notes require content"));
    assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    assert_eq!(api.to_string(), "Sticky notes require content");
}

#[test]
fn empty_update_maps_to_bad_request() {
    let api = item_error_to_api(ItemError::NoFields);
    assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    assert_eq!(api.to_string(), "No valid fields to update");
}

#[test]
fn missing_item_maps_to_not_found() {
    let api = item_error_to_api(ItemError::NotFound(Uuid::nil()));
    assert_eq!(api.status(), StatusCode::NOT_FOUND);
    assert_eq!(api.to_string(), "Item not found");
}

#[test]
fn corrupt_row_is_internal() {
    let api = item_error_to_api(ItemError::CorruptRow("kind".into()));
    assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn parse_item_id_accepts_uuid_and_rejects_garbage() {
    let id = Uuid::new_v4();
    assert_eq!(parse_item_id(&id.to_string()).unwrap(), id);
    assert_eq!(parse_item_id("not-an-id").unwrap_err().status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Router: writes require a bearer token
// =============================================================================

async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let app = crate::routes::api_routes(test_app_state());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn create_without_token_is_unauthorized() {
    let body = serde_json::json!({ "type": "sticky", "content": "hi", "position": {} });
    let (status, json) = send(json_request("POST", "/api/items", &body)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["detail"], "Could not validate credentials");
}

#[tokio::test]
async fn update_without_token_is_unauthorized() {
    let uri = format!("/api/items/{}", Uuid::new_v4());
    let (status, _) = send(json_request("PUT", &uri, &serde_json::json!({ "caption": "x" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_without_token_is_unauthorized() {
    let uri = format!("/api/items/{}", Uuid::new_v4());
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
