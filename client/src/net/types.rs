//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field for field. Ids and
//! timestamps stay strings on the client: the UI only compares and displays
//! them, so parsing would add failure modes without adding behavior.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Item discriminant, serialized as the `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Image,
    Sticky,
}

/// Grid cell an item was placed in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_row: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// A wall item as returned by `/api/items`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier (UUID string).
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Sticky note text.
    #[serde(default)]
    pub content: Option<String>,
    /// Server-relative URL of the stored image (`/uploads/<file>`).
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub position: GridPosition,
    /// Palette class for sticky notes (`bg-sky-100`, ...).
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Create payload for `POST /api/items`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub position: GridPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl NewItem {
    #[must_use]
    pub fn image(image_url: String, caption: String, position: GridPosition) -> Self {
        Self {
            kind: ItemKind::Image,
            content: None,
            image_url: Some(image_url),
            caption: Some(caption),
            position,
            background_color: None,
        }
    }

    #[must_use]
    pub fn sticky(content: String, background_color: String, position: GridPosition) -> Self {
        Self {
            kind: ItemKind::Sticky,
            content: Some(content),
            image_url: None,
            caption: None,
            position,
            background_color: Some(background_color),
        }
    }
}

/// Partial update payload for `PUT /api/items/{id}`. `None` fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<GridPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Authenticated account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Register/login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// Upload response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub url: String,
}

/// Error body shape used by every failing API response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
