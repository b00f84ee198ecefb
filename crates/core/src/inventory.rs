//! Inventory slots and the merge-by-item rule.
//!
//! A user holds at most one slot per item; granting an item the user already
//! holds increments that slot's amount.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::pool::Range;
use crate::types::{DbId, ItemId};

/// A user's held quantity of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySlot {
    /// Unset until the slot has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub user_id: DbId,
    pub item_id: ItemId,
    pub amount: i32,
    /// Catalog snapshot, when resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

impl InventorySlot {
    /// The slot a roll grants when it lands on `range`.
    pub fn granted(user_id: DbId, range: &Range) -> Self {
        Self {
            id: None,
            user_id,
            item_id: range.item_id.clone(),
            amount: range.amount,
            item: None,
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }
}

/// A grant would push a slot's amount past `i32::MAX`.
#[derive(Debug, thiserror::Error)]
#[error("Amount of item {item_id} would overflow")]
pub struct AmountOverflow {
    pub item_id: ItemId,
}

/// All slots held by one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<InventorySlot>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    /// Add `grant` to the inventory, incrementing an existing slot for the
    /// same item or appending a new one. Returns the resulting slot, or
    /// leaves the inventory untouched if the amount would overflow.
    pub fn merge(&mut self, grant: InventorySlot) -> Result<&InventorySlot, AmountOverflow> {
        match self
            .slots
            .iter()
            .position(|slot| slot.item_id == grant.item_id)
        {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.amount = slot
                    .amount
                    .checked_add(grant.amount)
                    .ok_or_else(|| AmountOverflow {
                        item_id: grant.item_id.clone(),
                    })?;
                if grant.item.is_some() {
                    slot.item = grant.item;
                }
                Ok(&self.slots[index])
            }
            None => {
                self.slots.push(grant);
                Ok(&self.slots[self.slots.len() - 1])
            }
        }
    }
}
