//! Upload service: image file storage under the uploads directory.
//!
//! DESIGN
//! ======
//! Files are stored flat as `<uuid>.<ext>` and served back by the static
//! `/uploads` route. The client filename never reaches the filesystem: only
//! a sanitized extension survives. Deletion accepts only URLs that name a
//! single file directly under `/uploads/`.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// URL prefix under which stored files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads/";

const MAX_EXTENSION_LEN: usize = 8;
const FALLBACK_EXTENSION: &str = "img";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("File must be an image")]
    NotAnImage,
    #[error("No file provided")]
    MissingFile,
    #[error("File too large")]
    TooLarge,
    #[error("upload io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a stored upload lives, as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StoredUpload {
    pub filename: String,
    pub url: String,
}

#[must_use]
pub fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
}

/// Reject non-image or oversized uploads before anything touches disk.
///
/// # Errors
///
/// Returns `NotAnImage` or `TooLarge`.
pub fn validate_upload(content_type: Option<&str>, size: usize, max_bytes: usize) -> Result<(), UploadError> {
    if !is_image_content_type(content_type) {
        return Err(UploadError::NotAnImage);
    }
    if size > max_bytes {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

fn sanitize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim().to_ascii_lowercase();
    let valid = !ext.is_empty() && ext.len() <= MAX_EXTENSION_LEN && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(ext)
}

/// Pick the stored extension: the client filename's if sane, else the MIME
/// subtype (`image/svg+xml` → `svg`, `image/jpeg` → `jpg`).
#[must_use]
pub fn file_extension(filename: Option<&str>, content_type: Option<&str>) -> String {
    if let Some(ext) = filename
        .and_then(|name| name.rsplit_once('.'))
        .and_then(|(_, ext)| sanitize_extension(ext))
    {
        return ext;
    }

    let from_mime = content_type
        .and_then(|ct| ct.split(';').next())
        .and_then(|ct| ct.split_once('/'))
        .and_then(|(_, subtype)| subtype.split('+').next())
        .and_then(sanitize_extension);

    match from_mime.as_deref() {
        Some("jpeg") => "jpg".to_owned(),
        Some(ext) => ext.to_owned(),
        None => FALLBACK_EXTENSION.to_owned(),
    }
}

/// Resolve a `/uploads/<name>` URL to a path inside `dir`. Anything else,
/// including nested paths or traversal, yields `None`.
#[must_use]
pub fn stored_path(dir: &Path, image_url: &str) -> Option<PathBuf> {
    let name = image_url.strip_prefix(UPLOADS_URL_PREFIX)?;
    let safe = !name.is_empty()
        && !name.starts_with('.')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    safe.then(|| dir.join(name))
}

/// Write `bytes` as a new uniquely-named file.
///
/// # Errors
///
/// Returns `Io` if the directory cannot be created or the file written.
pub async fn store_upload(dir: &Path, bytes: &[u8], extension: &str) -> Result<StoredUpload, UploadError> {
    tokio::fs::create_dir_all(dir).await?;

    let filename = format!("{}.{extension}", Uuid::new_v4());
    tokio::fs::write(dir.join(&filename), bytes).await?;

    tracing::info!(%filename, size = bytes.len(), "upload stored");
    let url = format!("{UPLOADS_URL_PREFIX}{filename}");
    Ok(StoredUpload { filename, url })
}

/// Remove the file behind an item's image URL. Foreign URLs and files that
/// are already gone are ignored.
///
/// # Errors
///
/// Returns `Io` for filesystem failures other than `NotFound`.
pub async fn remove_stored_file(dir: &Path, image_url: &str) -> Result<bool, UploadError> {
    let Some(path) = stored_path(dir, image_url) else {
        return Ok(false);
    };
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
