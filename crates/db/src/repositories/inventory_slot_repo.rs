//! Repository for the `inventory_slots` table.

use gacha_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory_slot::InventorySlotRow;

/// Slot columns joined with the referenced item, for the `s`/`i` aliases.
const JOINED_COLUMNS: &str = "s.id, s.user_id, s.item_id, s.amount, \
                              i.id AS item_pk, i.name, i.rarity, i.description, i.details, i.image";

/// Provides the inventory upsert and listing.
pub struct InventorySlotRepo;

impl InventorySlotRepo {
    /// Add `amount` of `item_id` to the user's inventory in one statement:
    /// the `(user_id, item_id)` slot is created or its amount incremented.
    pub async fn add(
        pool: &PgPool,
        user_id: DbId,
        item_id: &str,
        amount: i32,
    ) -> Result<InventorySlotRow, sqlx::Error> {
        let query = format!(
            "WITH s AS (
                INSERT INTO inventory_slots (user_id, item_id, amount)
                VALUES ($1, $2, $3)
                ON CONFLICT ON CONSTRAINT uq_inventory_slots_user_item
                DO UPDATE SET amount = inventory_slots.amount + EXCLUDED.amount
                RETURNING id, user_id, item_id, amount
             )
             SELECT {JOINED_COLUMNS}
             FROM s JOIN items i ON i.item_id = s.item_id"
        );
        sqlx::query_as::<_, InventorySlotRow>(&query)
            .bind(user_id)
            .bind(item_id)
            .bind(amount)
            .fetch_one(pool)
            .await
    }

    /// List a user's slots, oldest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<InventorySlotRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM inventory_slots s JOIN items i ON i.item_id = s.item_id
             WHERE s.user_id = $1
             ORDER BY s.id ASC"
        );
        sqlx::query_as::<_, InventorySlotRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
