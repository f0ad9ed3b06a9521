//! Item routes: REST CRUD for wall entries.

use axum::extract::{Path, State};
use axum::response::Json;
use uuid::Uuid;

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::services::item::{self, ItemError, ItemUpdate, NewItem};
use crate::services::upload;
use crate::state::{AppState, Item, ItemKind};

const ITEM_NOT_FOUND: &str = "Item not found";

pub(crate) fn item_error_to_api(err: ItemError) -> ApiError {
    match err {
        ItemError::Invalid(msg) => ApiError::BadRequest(msg.to_owned()),
        ItemError::NoFields => ApiError::BadRequest(err.to_string()),
        ItemError::NotFound(_) => ApiError::NotFound(ITEM_NOT_FOUND),
        ItemError::CorruptRow(_) | ItemError::Database(_) => ApiError::internal(err),
    }
}

/// Unparseable ids cannot name an item, so they read as not found.
pub(crate) fn parse_item_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::NotFound(ITEM_NOT_FOUND))
}

/// `GET /api/items`: every item in insertion order. Public.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = item::list_items(&state.pool).await.map_err(item_error_to_api)?;
    Ok(Json(items))
}

/// `POST /api/items`: create an image or sticky item.
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewItem>,
) -> Result<Json<Item>, ApiError> {
    let created = item::create_item(&state.pool, &body, auth.user.id)
        .await
        .map_err(item_error_to_api)?;
    tracing::info!(item_id = %created.id, kind = created.kind.as_str(), user_id = %auth.user.id, "item created");
    Ok(Json(created))
}

/// `PUT /api/items/{id}`: partial update of caption, position, or content.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _auth: AuthUser,
    Json(body): Json<ItemUpdate>,
) -> Result<Json<Item>, ApiError> {
    let item_id = parse_item_id(&id)?;
    let updated = item::update_item(&state.pool, item_id, &body)
        .await
        .map_err(item_error_to_api)?;
    Ok(Json(updated))
}

/// `DELETE /api/items/{id}`: remove the item and its stored image file.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let item_id = parse_item_id(&id)?;
    let removed = item::delete_item(&state.pool, item_id)
        .await
        .map_err(item_error_to_api)?;

    if removed.kind == ItemKind::Image {
        if let Some(url) = removed.image_url.as_deref() {
            if let Err(e) = upload::remove_stored_file(&state.config.uploads_dir, url).await {
                tracing::warn!(error = %e, %item_id, "stored image cleanup failed");
            }
        }
    }

    tracing::info!(%item_id, user_id = %auth.user.id, "item deleted");
    Ok(Json(serde_json::json!({ "message": "Item deleted successfully" })))
}

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;
