use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

// =============================================================================
// auth_error_to_api
// =============================================================================

#[test]
fn validation_errors_are_bad_requests() {
    for err in [AuthError::InvalidEmail, AuthError::EmptyName, AuthError::ShortPassword] {
        assert_eq!(auth_error_to_api(err).status(), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn email_taken_keeps_message() {
    let api = auth_error_to_api(AuthError::EmailTaken);
    assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    assert_eq!(api.to_string(), "Email already registered");
}

#[test]
fn invalid_credentials_is_unauthorized() {
    let api = auth_error_to_api(AuthError::InvalidCredentials);
    assert!(matches!(api, ApiError::InvalidCredentials));
}

#[test]
fn hash_failure_is_internal() {
    let api = auth_error_to_api(AuthError::Hash("bad params".into()));
    assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(api.to_string(), "Internal server error");
}

// =============================================================================
// TokenResponse
// =============================================================================

#[test]
fn token_response_shape() {
    let user = SessionUser { id: uuid::Uuid::nil(), email: "ada@example.com".into(), name: "Ada".into() };
    let json = serde_json::to_value(TokenResponse::bearer("abc".into(), user)).unwrap();
    assert_eq!(json["access_token"], "abc");
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["user"]["email"], "ada@example.com");
}

// =============================================================================
// AuthUser extractor (no database reached)
// =============================================================================

async fn me_status(authorization: Option<&str>) -> StatusCode {
    let app = crate::routes::api_routes(test_app_state());
    let mut request = Request::builder().uri("/api/auth/me");
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }
    let response = app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap();
    response.status()
}

#[tokio::test]
async fn me_without_header_is_unauthorized() {
    assert_eq!(me_status(None).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_non_bearer_scheme_is_unauthorized() {
    assert_eq!(me_status(Some("Basic dXNlcjpwdw==")).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_header_is_unauthorized() {
    let app = crate::routes::api_routes(test_app_state());
    let request = Request::post("/api/auth/logout").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
}
