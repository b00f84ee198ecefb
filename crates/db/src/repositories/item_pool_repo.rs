//! Repository for the `item_pools` table.

use gacha_core::pool::Range;
use gacha_core::store::NewPool;
use gacha_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::item_pool::{ItemPoolRow, UpdateItemPool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, pool_type, title, description, image, pool, created_at, updated_at";

/// Provides CRUD operations for item pools.
pub struct ItemPoolRepo;

impl ItemPoolRepo {
    /// Insert a new pool, returning the created row.
    ///
    /// Fails with a `uq_item_pools_type` violation if the type is taken.
    pub async fn create(pool: &PgPool, input: &NewPool) -> Result<ItemPoolRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO item_pools (pool_type, title, description, image, pool)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemPoolRow>(&query)
            .bind(&input.pool_type)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(Json(&input.pool))
            .fetch_one(pool)
            .await
    }

    /// Find a pool by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ItemPoolRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM item_pools WHERE id = $1");
        sqlx::query_as::<_, ItemPoolRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a pool by its unique type key.
    pub async fn find_by_type(
        pool: &PgPool,
        pool_type: &str,
    ) -> Result<Option<ItemPoolRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM item_pools WHERE pool_type = $1");
        sqlx::query_as::<_, ItemPoolRow>(&query)
            .bind(pool_type)
            .fetch_optional(pool)
            .await
    }

    /// List all pools ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<ItemPoolRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM item_pools ORDER BY id ASC");
        sqlx::query_as::<_, ItemPoolRow>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM item_pools")
            .fetch_one(pool)
            .await
    }

    /// Types of the pools with at least one range granting `item_id`.
    pub async fn types_referencing_item(
        pool: &PgPool,
        item_id: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT pool_type FROM item_pools
             WHERE pool @> jsonb_build_array(jsonb_build_object('itemId', $1::text))
             ORDER BY id ASC",
        )
        .bind(item_id)
        .fetch_all(pool)
        .await
    }

    /// Patch descriptive fields. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItemPool,
    ) -> Result<Option<ItemPoolRow>, sqlx::Error> {
        let query = format!(
            "UPDATE item_pools SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image = COALESCE($4, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemPoolRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the range table. Returns `true` if the row was updated.
    pub async fn update_ranges(
        pool: &PgPool,
        id: DbId,
        ranges: &[Range],
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE item_pools SET pool = $2 WHERE id = $1")
            .bind(id)
            .bind(Json(ranges))
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace every field of a pool. Returns `None` if it does not exist.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &NewPool,
    ) -> Result<Option<ItemPoolRow>, sqlx::Error> {
        let query = format!(
            "UPDATE item_pools SET
                pool_type = $2,
                title = $3,
                description = $4,
                image = $5,
                pool = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemPoolRow>(&query)
            .bind(id)
            .bind(&input.pool_type)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(Json(&input.pool))
            .fetch_optional(pool)
            .await
    }

    /// Delete a pool. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM item_pools WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
