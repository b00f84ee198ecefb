//! Repository for the `items` table.

use gacha_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{CreateItem, ItemRow, UpdateItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, item_id, name, rarity, description, details, image, created_at, updated_at";

/// Provides CRUD operations for catalog items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item under the given catalog key, returning the created row.
    pub async fn create(
        pool: &PgPool,
        item_id: &str,
        input: &CreateItem,
    ) -> Result<ItemRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (item_id, name, rarity, description, details, image)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(item_id)
            .bind(&input.name)
            .bind(&input.rarity)
            .bind(&input.description)
            .bind(&input.details)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Highest catalog key currently in use, compared numerically.
    pub async fn last_item_id(pool: &PgPool) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT item_id FROM items ORDER BY item_id::BIGINT DESC LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }

    /// Find an item by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an item by its catalog key.
    pub async fn find_by_item_id(
        pool: &PgPool,
        item_id: &str,
    ) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE item_id = $1");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(item_id)
            .fetch_optional(pool)
            .await
    }

    /// List all items in catalog order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY item_id::BIGINT ASC");
        sqlx::query_as::<_, ItemRow>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = COALESCE($2, name),
                rarity = COALESCE($3, rarity),
                description = COALESCE($4, description),
                details = COALESCE($5, details),
                image = COALESCE($6, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.rarity)
            .bind(&input.description)
            .bind(&input.details)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every editable field of an item. The catalog key is kept.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateItem,
    ) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = $2,
                rarity = $3,
                description = $4,
                details = $5,
                image = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.rarity)
            .bind(&input.description)
            .bind(&input.details)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
