//! Inventory slot rows, joined with their catalog item.

use gacha_core::inventory::InventorySlot;
use gacha_core::item::Item;
use gacha_core::types::DbId;
use sqlx::FromRow;

/// An `inventory_slots` row joined with the `items` row it references.
#[derive(Debug, Clone, FromRow)]
pub struct InventorySlotRow {
    pub id: DbId,
    pub user_id: DbId,
    pub item_id: String,
    pub amount: i32,
    pub item_pk: DbId,
    pub name: String,
    pub rarity: String,
    pub description: String,
    pub details: String,
    pub image: Option<String>,
}

impl From<InventorySlotRow> for InventorySlot {
    fn from(row: InventorySlotRow) -> Self {
        let item = Item {
            id: row.item_pk,
            item_id: row.item_id.clone(),
            name: row.name,
            rarity: row.rarity,
            description: row.description,
            details: row.details,
            image: row.image,
        };
        InventorySlot {
            id: Some(row.id),
            user_id: row.user_id,
            item_id: row.item_id,
            amount: row.amount,
            item: Some(item),
        }
    }
}
