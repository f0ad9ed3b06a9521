use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

#[test]
fn non_image_is_bad_request() {
    let api = upload_error_to_api(UploadError::NotAnImage);
    assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    assert_eq!(api.to_string(), "File must be an image");
}

#[test]
fn oversized_is_payload_too_large() {
    assert_eq!(upload_error_to_api(UploadError::TooLarge).status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[test]
fn io_failure_is_internal() {
    let err = UploadError::Io(std::io::Error::other("disk full"));
    assert_eq!(upload_error_to_api(err).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn upload_without_token_is_unauthorized() {
    let app = crate::routes::api_routes(test_app_state());
    let request = Request::post("/api/upload")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=X")
        .body(Body::from("--X--\r\n"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
