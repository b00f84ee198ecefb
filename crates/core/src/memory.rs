//! In-memory store implementations.
//!
//! Used by unit tests and for running the roll service without a database.
//! A single [`MemoryStore`] implements every store trait so the service can
//! share it through one `Arc`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::inventory::{Inventory, InventorySlot};
use crate::item::Item;
use crate::pool::{ItemPool, Range};
use crate::store::{ItemCatalog, NewPool, PoolStore, UserRef, UserStore};
use crate::types::DbId;

/// Raised when a pool type is already taken.
#[derive(Debug, thiserror::Error)]
#[error("Duplicate pool type: {0}")]
pub struct DuplicatePoolType(pub String);

#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: AtomicI64,
    pools: RwLock<Vec<ItemPool>>,
    users: RwLock<Vec<UserRef>>,
    items: RwLock<Vec<Item>>,
    inventories: RwLock<HashMap<DbId, Inventory>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> DbId {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Register a user and return its id.
    pub async fn insert_user(&self, username: &str) -> DbId {
        let id = self.allocate_id();
        self.users.write().await.push(UserRef {
            id,
            username: username.to_string(),
        });
        id
    }

    /// Add a catalog item, assigning it a fresh database id.
    pub async fn insert_item(&self, mut item: Item) -> Item {
        item.id = self.allocate_id();
        self.items.write().await.push(item.clone());
        item
    }
}

#[async_trait]
impl PoolStore for MemoryStore {
    async fn create_pool(&self, input: &NewPool) -> Result<ItemPool, StoreError> {
        let mut pools = self.pools.write().await;
        if pools.iter().any(|p| p.pool_type == input.pool_type) {
            return Err(StoreError::backend(DuplicatePoolType(
                input.pool_type.clone(),
            )));
        }
        let pool = ItemPool {
            id: self.allocate_id(),
            pool_type: input.pool_type.clone(),
            title: input.title.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
            pool: input.pool.clone(),
        };
        pools.push(pool.clone());
        Ok(pool)
    }

    async fn find_pool(&self, id: DbId) -> Result<Option<ItemPool>, StoreError> {
        Ok(self.pools.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_pool_by_type(&self, pool_type: &str) -> Result<Option<ItemPool>, StoreError> {
        Ok(self
            .pools
            .read()
            .await
            .iter()
            .find(|p| p.pool_type == pool_type)
            .cloned())
    }

    async fn list_pools(&self) -> Result<Vec<ItemPool>, StoreError> {
        Ok(self.pools.read().await.clone())
    }

    async fn count_pools(&self) -> Result<i64, StoreError> {
        Ok(self.pools.read().await.len() as i64)
    }

    async fn update_ranges(&self, id: DbId, ranges: &[Range]) -> Result<bool, StoreError> {
        let mut pools = self.pools.write().await;
        match pools.iter_mut().find(|p| p.id == id) {
            Some(pool) => {
                pool.pool = ranges.to_vec();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn replace_pool(
        &self,
        id: DbId,
        input: &NewPool,
    ) -> Result<Option<ItemPool>, StoreError> {
        let mut pools = self.pools.write().await;
        if pools
            .iter()
            .any(|p| p.id != id && p.pool_type == input.pool_type)
        {
            return Err(StoreError::backend(DuplicatePoolType(
                input.pool_type.clone(),
            )));
        }
        let Some(pool) = pools.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        pool.pool_type = input.pool_type.clone();
        pool.title = input.title.clone();
        pool.description = input.description.clone();
        pool.image = input.image.clone();
        pool.pool = input.pool.clone();
        Ok(Some(pool.clone()))
    }

    async fn delete_pool(&self, id: DbId) -> Result<bool, StoreError> {
        let mut pools = self.pools.write().await;
        let before = pools.len();
        pools.retain(|p| p.id != id);
        Ok(pools.len() != before)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, id: DbId) -> Result<Option<UserRef>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn add_to_inventory(&self, grant: &InventorySlot) -> Result<InventorySlot, StoreError> {
        let item = self.find_item(&grant.item_id).await?;

        let mut grant = grant.clone();
        grant.id = Some(self.allocate_id());
        grant.item = item;

        let mut inventories = self.inventories.write().await;
        let slot = inventories
            .entry(grant.user_id)
            .or_default()
            .merge(grant)
            .map_err(StoreError::backend)?
            .clone();
        Ok(slot)
    }

    async fn list_inventory(&self, user_id: DbId) -> Result<Vec<InventorySlot>, StoreError> {
        Ok(self
            .inventories
            .read()
            .await
            .get(&user_id)
            .map(|inventory| inventory.slots().to_vec())
            .unwrap_or_default())
    }
}

#[async_trait]
impl ItemCatalog for MemoryStore {
    async fn find_item(&self, item_id: &str) -> Result<Option<Item>, StoreError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|item| item.item_id == item_id)
            .cloned())
    }
}
