//! PostgreSQL implementations of the `gacha_core` store traits.

use async_trait::async_trait;
use gacha_core::error::StoreError;
use gacha_core::inventory::InventorySlot;
use gacha_core::item::Item;
use gacha_core::pool::{ItemPool, Range};
use gacha_core::store::{ItemCatalog, NewPool, PoolStore, UserRef, UserStore};
use gacha_core::types::DbId;
use sqlx::PgPool;

use crate::repositories::{InventorySlotRepo, ItemPoolRepo, ItemRepo, UserRepo};

/// Backs every store trait with the shared connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PoolStore for PgStore {
    async fn create_pool(&self, input: &NewPool) -> Result<ItemPool, StoreError> {
        let row = ItemPoolRepo::create(&self.pool, input)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.into())
    }

    async fn find_pool(&self, id: DbId) -> Result<Option<ItemPool>, StoreError> {
        let row = ItemPoolRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.map(Into::into))
    }

    async fn find_pool_by_type(&self, pool_type: &str) -> Result<Option<ItemPool>, StoreError> {
        let row = ItemPoolRepo::find_by_type(&self.pool, pool_type)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.map(Into::into))
    }

    async fn list_pools(&self) -> Result<Vec<ItemPool>, StoreError> {
        let rows = ItemPoolRepo::list(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_pools(&self) -> Result<i64, StoreError> {
        ItemPoolRepo::count(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    async fn update_ranges(&self, id: DbId, ranges: &[Range]) -> Result<bool, StoreError> {
        ItemPoolRepo::update_ranges(&self.pool, id, ranges)
            .await
            .map_err(StoreError::backend)
    }

    async fn replace_pool(
        &self,
        id: DbId,
        input: &NewPool,
    ) -> Result<Option<ItemPool>, StoreError> {
        let row = ItemPoolRepo::replace(&self.pool, id, input)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.map(Into::into))
    }

    async fn delete_pool(&self, id: DbId) -> Result<bool, StoreError> {
        ItemPoolRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::backend)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user(&self, id: DbId) -> Result<Option<UserRef>, StoreError> {
        let user = UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::backend)?;
        Ok(user.map(Into::into))
    }

    async fn add_to_inventory(&self, grant: &InventorySlot) -> Result<InventorySlot, StoreError> {
        let row = InventorySlotRepo::add(&self.pool, grant.user_id, &grant.item_id, grant.amount)
            .await
            .map_err(StoreError::backend)?;
        tracing::debug!(
            user_id = row.user_id,
            item_id = %row.item_id,
            amount = row.amount,
            "Inventory slot upserted"
        );
        Ok(row.into())
    }

    async fn list_inventory(&self, user_id: DbId) -> Result<Vec<InventorySlot>, StoreError> {
        let rows = InventorySlotRepo::list_for_user(&self.pool, user_id)
            .await
            .map_err(StoreError::backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ItemCatalog for PgStore {
    async fn find_item(&self, item_id: &str) -> Result<Option<Item>, StoreError> {
        let row = ItemRepo::find_by_item_id(&self.pool, item_id)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.map(Into::into))
    }
}
