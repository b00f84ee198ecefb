//! Item pool rows and DTOs.

use gacha_core::pool::{ItemPool, Range};
use gacha_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `item_pools` table; the range table is stored as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct ItemPoolRow {
    pub id: DbId,
    pub pool_type: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub pool: Json<Vec<Range>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ItemPoolRow> for ItemPool {
    fn from(row: ItemPoolRow) -> Self {
        ItemPool {
            id: row.id,
            pool_type: row.pool_type,
            title: row.title,
            description: row.description,
            image: row.image,
            pool: row.pool.0,
        }
    }
}

/// DTO for patching a pool's descriptive fields. The range table and type
/// are changed through dedicated operations only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItemPool {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}
