//! Storage capabilities the roll service depends on.
//!
//! Each trait is implemented by the PostgreSQL adapters in `gacha-db` and by
//! the in-memory stores in [`crate::memory`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::inventory::InventorySlot;
use crate::item::Item;
use crate::pool::{ItemPool, Range};
use crate::types::DbId;

/// Everything needed to create (or fully replace) a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPool {
    #[serde(rename = "type")]
    pub pool_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub pool: Vec<Range>,
}

/// The parts of a user the roll service cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRef {
    pub id: DbId,
    pub username: String,
}

#[async_trait]
pub trait PoolStore: Send + Sync {
    /// Insert a pool. Fails if another pool already uses the same type.
    async fn create_pool(&self, input: &NewPool) -> Result<ItemPool, StoreError>;

    async fn find_pool(&self, id: DbId) -> Result<Option<ItemPool>, StoreError>;

    async fn find_pool_by_type(&self, pool_type: &str) -> Result<Option<ItemPool>, StoreError>;

    /// All pools, oldest first.
    async fn list_pools(&self) -> Result<Vec<ItemPool>, StoreError>;

    async fn count_pools(&self) -> Result<i64, StoreError>;

    /// Overwrite the range table. Returns `false` if the pool does not exist.
    async fn update_ranges(&self, id: DbId, ranges: &[Range]) -> Result<bool, StoreError>;

    /// Replace every field of a pool. Returns `None` if it does not exist.
    async fn replace_pool(&self, id: DbId, input: &NewPool)
        -> Result<Option<ItemPool>, StoreError>;

    /// Returns `false` if the pool does not exist.
    async fn delete_pool(&self, id: DbId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, id: DbId) -> Result<Option<UserRef>, StoreError>;

    /// Create the `(user, item)` slot or add to its amount, atomically.
    async fn add_to_inventory(&self, grant: &InventorySlot) -> Result<InventorySlot, StoreError>;

    async fn list_inventory(&self, user_id: DbId) -> Result<Vec<InventorySlot>, StoreError>;
}

#[async_trait]
pub trait ItemCatalog: Send + Sync {
    async fn find_item(&self, item_id: &str) -> Result<Option<Item>, StoreError>;
}
