//! Catalog item rows and DTOs.

use gacha_core::item::Item;
use gacha_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRow {
    pub id: DbId,
    pub item_id: String,
    pub name: String,
    pub rarity: String,
    pub description: String,
    pub details: String,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            item_id: row.item_id,
            name: row.name,
            rarity: row.rarity,
            description: row.description,
            details: row.details,
            image: row.image,
        }
    }
}

/// DTO for creating (or fully replacing) an item. The catalog key is
/// assigned by the server and never taken from the request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
    pub image: Option<String>,
}

/// DTO for a partial item update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub rarity: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub image: Option<String>,
}
