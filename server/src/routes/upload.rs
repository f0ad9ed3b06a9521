//! Upload route: multipart image intake.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::services::upload::{self, StoredUpload, UploadError};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

pub(crate) fn upload_error_to_api(err: UploadError) -> ApiError {
    match err {
        UploadError::NotAnImage | UploadError::MissingFile => ApiError::BadRequest(err.to_string()),
        UploadError::TooLarge => ApiError::PayloadTooLarge,
        UploadError::Io(_) => ApiError::internal(err),
    }
}

fn multipart_error_to_api(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::BadRequest(err.body_text())
    }
}

/// `POST /api/upload`: store the `file` field and return its public URL.
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<StoredUpload>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error_to_api)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        let file_name = field.file_name().map(str::to_owned);
        let max_bytes = state.config.max_upload_bytes;
        upload::validate_upload(content_type.as_deref(), 0, max_bytes).map_err(upload_error_to_api)?;

        let bytes = field.bytes().await.map_err(multipart_error_to_api)?;
        upload::validate_upload(content_type.as_deref(), bytes.len(), max_bytes).map_err(upload_error_to_api)?;

        let extension = upload::file_extension(file_name.as_deref(), content_type.as_deref());
        let stored = upload::store_upload(&state.config.uploads_dir, &bytes, &extension)
            .await
            .map_err(upload_error_to_api)?;
        tracing::info!(filename = %stored.filename, user_id = %auth.user.id, "image uploaded");
        return Ok(Json(stored));
    }

    Err(upload_error_to_api(UploadError::MissingFile))
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
