use super::*;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("wall-upload-test-{}", Uuid::new_v4()))
}

// =============================================================================
// content type
// =============================================================================

#[test]
fn image_content_types_accepted() {
    assert!(is_image_content_type(Some("image/png")));
    assert!(is_image_content_type(Some("Image/JPEG")));
}

#[test]
fn non_image_content_types_rejected() {
    assert!(!is_image_content_type(Some("application/pdf")));
    assert!(!is_image_content_type(Some("text/image")));
    assert!(!is_image_content_type(None));
}

#[test]
fn validate_upload_checks_type_then_size() {
    assert!(validate_upload(Some("image/png"), 10, 10).is_ok());
    assert!(matches!(validate_upload(Some("text/plain"), 1, 10), Err(UploadError::NotAnImage)));
    assert!(matches!(validate_upload(Some("image/png"), 11, 10), Err(UploadError::TooLarge)));
}

// =============================================================================
// file_extension
// =============================================================================

#[test]
fn extension_from_filename_is_lowercased() {
    assert_eq!(file_extension(Some("Shot.PNG"), Some("image/png")), "png");
}

#[test]
fn extension_falls_back_to_mime_subtype() {
    assert_eq!(file_extension(Some("clipboard"), Some("image/webp")), "webp");
    assert_eq!(file_extension(None, Some("image/jpeg")), "jpg");
    assert_eq!(file_extension(None, Some("image/svg+xml")), "svg");
}

#[test]
fn hostile_extension_is_replaced() {
    assert_eq!(file_extension(Some("x./../../etc"), Some("image/gif")), "gif");
    assert_eq!(file_extension(Some("x.verylongextension"), Some("image/png")), "png");
}

#[test]
fn extension_fallback_when_nothing_usable() {
    assert_eq!(file_extension(None, None), "img");
}

// =============================================================================
// stored_path
// =============================================================================

#[test]
fn stored_path_accepts_flat_upload_names() {
    let dir = Path::new("/srv/uploads");
    assert_eq!(stored_path(dir, "/uploads/abc-123.png"), Some(dir.join("abc-123.png")));
}

#[test]
fn stored_path_rejects_traversal_and_foreign_urls() {
    let dir = Path::new("/srv/uploads");
    assert_eq!(stored_path(dir, "/uploads/../secret"), None);
    assert_eq!(stored_path(dir, "/uploads/a/b.png"), None);
    assert_eq!(stored_path(dir, "/uploads/"), None);
    assert_eq!(stored_path(dir, "https://cdn.example.com/a.png"), None);
}

// =============================================================================
// filesystem
// =============================================================================

#[tokio::test]
async fn store_then_remove() {
    let dir = scratch_dir();
    let stored = store_upload(&dir, b"\x89PNG", "png").await.unwrap();
    assert!(stored.filename.ends_with(".png"));
    assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
    assert_eq!(tokio::fs::read(dir.join(&stored.filename)).await.unwrap(), b"\x89PNG");

    assert!(remove_stored_file(&dir, &stored.url).await.unwrap());
    assert!(!remove_stored_file(&dir, &stored.url).await.unwrap());

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn remove_ignores_foreign_url() {
    let dir = scratch_dir();
    assert!(!remove_stored_file(&dir, "https://example.com/x.png").await.unwrap());
}
