use http_body_util::BodyExt;

use super::*;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn status_mapping() {
    assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::NotFound("Item not found").status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ApiError::internal("boom").status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn not_found_renders_detail_body() {
    let response = ApiError::NotFound("Item not found").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, serde_json::json!({ "detail": "Item not found" }));
}

#[tokio::test]
async fn unauthorized_sets_www_authenticate() {
    let response = ApiError::Unauthorized.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).map(HeaderValue::as_bytes),
        Some(&b"Bearer"[..])
    );
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "detail": "Could not validate credentials" })
    );
}

#[tokio::test]
async fn internal_error_hides_cause() {
    let response = ApiError::internal("connection refused on 10.0.0.3").into_response();
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "detail": "Internal server error" }));
}
