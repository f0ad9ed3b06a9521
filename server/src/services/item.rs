//! Item service: list, create, update, delete wall items.
//!
//! DESIGN
//! ======
//! Validation is pure (`validate_new_item`, `ItemUpdate::is_empty`) so the
//! route layer can be tested without Postgres. Queries return the affected
//! row with `RETURNING` so callers always answer with the stored state.
//!
//! ORDERING
//! ========
//! Listing is insertion order: `created_at` ascending with the id as a
//! stable tiebreak. Positions never influence order.

use serde::Deserialize;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::state::{GridPosition, Item, ItemKind};

const ITEM_COLUMNS: &str = "id, kind, content, image_url, caption, position, background_color, created_at, created_by";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("No valid fields to update")]
    NoFields,
    #[error("Item not found")]
    NotFound(Uuid),
    #[error("corrupt item row: {0}")]
    CorruptRow(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create payload, as posted by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    pub position: GridPosition,
    #[serde(default)]
    pub background_color: Option<String>,
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemUpdate {
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub position: Option<GridPosition>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ItemUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.caption.is_none() && self.position.is_none() && self.content.is_none()
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check kind-specific required fields.
///
/// # Errors
///
/// Image items need a non-blank `image_url`; sticky items need non-blank
/// `content`.
pub fn validate_new_item(item: &NewItem) -> Result<(), ItemError> {
    let blank = |value: &Option<String>| value.as_deref().is_none_or(|v| v.trim().is_empty());
    match item.kind {
        ItemKind::Image if blank(&item.image_url) => Err(ItemError::Invalid("Image items require an image_url")),
        ItemKind::Sticky if blank(&item.content) => Err(ItemError::Invalid("Sticky notes require content")),
        _ => Ok(()),
    }
}

fn item_from_row(row: &PgRow) -> Result<Item, ItemError> {
    let kind_raw: String = row.try_get("kind")?;
    let kind = ItemKind::parse(&kind_raw).ok_or_else(|| ItemError::CorruptRow(format!("unknown kind {kind_raw:?}")))?;
    let Json(position): Json<GridPosition> = row.try_get("position")?;
    let created_at: OffsetDateTime = row.try_get("created_at")?;

    Ok(Item {
        id: row.try_get("id")?,
        kind,
        content: row.try_get("content")?,
        image_url: row.try_get("image_url")?,
        caption: row.try_get("caption")?,
        position,
        background_color: row.try_get("background_color")?,
        created_at,
        created_by: row.try_get("created_by")?,
    })
}

// =============================================================================
// QUERIES
// =============================================================================

/// All items in insertion order.
pub async fn list_items(pool: &PgPool) -> Result<Vec<Item>, ItemError> {
    let rows = sqlx::query(&format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at ASC, id ASC"))
        .fetch_all(pool)
        .await?;
    rows.iter().map(item_from_row).collect()
}

/// Insert a validated item, stamping id, creation time, and creator.
///
/// # Errors
///
/// Returns `Invalid` if kind-specific fields are missing.
pub async fn create_item(pool: &PgPool, item: &NewItem, created_by: Uuid) -> Result<Item, ItemError> {
    validate_new_item(item)?;

    let row = sqlx::query(&format!(
        "INSERT INTO items (id, kind, content, image_url, caption, position, background_color, created_by)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {ITEM_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(item.kind.as_str())
    .bind(&item.content)
    .bind(&item.image_url)
    .bind(&item.caption)
    .bind(Json(&item.position))
    .bind(&item.background_color)
    .bind(created_by)
    .fetch_one(pool)
    .await?;

    item_from_row(&row)
}

/// Apply a partial update and return the stored row.
///
/// # Errors
///
/// Returns `NoFields` for an empty update and `NotFound` for an unknown id.
pub async fn update_item(pool: &PgPool, item_id: Uuid, update: &ItemUpdate) -> Result<Item, ItemError> {
    if update.is_empty() {
        return Err(ItemError::NoFields);
    }

    let row = sqlx::query(&format!(
        "UPDATE items SET
             caption = COALESCE($2, caption),
             position = COALESCE($3, position),
             content = COALESCE($4, content)
         WHERE id = $1
         RETURNING {ITEM_COLUMNS}"
    ))
    .bind(item_id)
    .bind(&update.caption)
    .bind(update.position.as_ref().map(Json))
    .bind(&update.content)
    .fetch_optional(pool)
    .await?
    .ok_or(ItemError::NotFound(item_id))?;

    item_from_row(&row)
}

/// Delete an item and return the removed row so callers can clean up files.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id.
pub async fn delete_item(pool: &PgPool, item_id: Uuid) -> Result<Item, ItemError> {
    let row = sqlx::query(&format!("DELETE FROM items WHERE id = $1 RETURNING {ITEM_COLUMNS}"))
        .bind(item_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ItemError::NotFound(item_id))?;

    item_from_row(&row)
}

#[cfg(test)]
#[path = "item_test.rs"]
mod tests;
