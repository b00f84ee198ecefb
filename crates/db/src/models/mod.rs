//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - A conversion into the matching `gacha_core` domain type, where one exists
//! - `Deserialize` create/update DTOs for inserts and patches

pub mod inventory_slot;
pub mod item;
pub mod item_pool;
pub mod user;
