//! Roll service: the operations that combine pools, users and the catalog.

use std::sync::Arc;

use crate::error::{GachaError, PoolKey};
use crate::inventory::InventorySlot;
use crate::item::Item;
use crate::pool::{build_range_table, ItemPool, Range};
use crate::roll::RollSource;
use crate::store::{ItemCatalog, NewPool, PoolStore, UserStore};
use crate::types::DbId;

/// Rolls, range maintenance and inventory reads over explicit store handles.
#[derive(Clone)]
pub struct RollService {
    pools: Arc<dyn PoolStore>,
    users: Arc<dyn UserStore>,
    catalog: Arc<dyn ItemCatalog>,
}

impl RollService {
    pub fn new(
        pools: Arc<dyn PoolStore>,
        users: Arc<dyn UserStore>,
        catalog: Arc<dyn ItemCatalog>,
    ) -> Self {
        Self {
            pools,
            users,
            catalog,
        }
    }

    /// Roll once against the pool of type `pool_type` for `user_id`, add the
    /// result to the user's inventory and return the granted item.
    pub async fn roll_for_user<S>(
        &self,
        user_id: DbId,
        pool_type: &str,
        source: &mut S,
    ) -> Result<Item, GachaError>
    where
        S: RollSource + Send + ?Sized,
    {
        let pool = self
            .pools
            .find_pool_by_type(pool_type)
            .await?
            .ok_or_else(|| GachaError::PoolNotFound(PoolKey::Type(pool_type.to_string())))?;

        self.users
            .find_user(user_id)
            .await?
            .ok_or(GachaError::UserNotFound(user_id))?;

        let grant = pool.roll_item(user_id, source)?;

        let item = self
            .catalog
            .find_item(&grant.item_id)
            .await?
            .ok_or_else(|| GachaError::ItemNotFound(grant.item_id.clone()))?;

        self.users
            .add_to_inventory(&grant.with_item(item.clone()))
            .await?;

        Ok(item)
    }

    /// Validate a new range for item `item_id` and append it to pool `pool_id`.
    pub async fn add_range(
        &self,
        pool_id: DbId,
        item_id: &str,
        min_value: i32,
        max_value: i32,
        amount: i32,
    ) -> Result<ItemPool, GachaError> {
        let candidate = Range::new(min_value, max_value, item_id, amount);
        candidate.validate_bounds()?;

        let mut pool = self
            .pools
            .find_pool(pool_id)
            .await?
            .ok_or(GachaError::PoolNotFound(PoolKey::Id(pool_id)))?;
        self.require_item(item_id).await?;

        pool.add_range(candidate)?;

        if !self.pools.update_ranges(pool.id, &pool.pool).await? {
            return Err(GachaError::PoolNotFound(PoolKey::Id(pool_id)));
        }
        Ok(pool)
    }

    /// Create a pool after validating its initial range table.
    pub async fn create_pool(&self, mut input: NewPool) -> Result<ItemPool, GachaError> {
        input.pool = self.checked_range_table(input.pool).await?;
        Ok(self.pools.create_pool(&input).await?)
    }

    /// Replace every field of pool `id`, re-validating the range table.
    pub async fn replace_pool(&self, id: DbId, mut input: NewPool) -> Result<ItemPool, GachaError> {
        input.pool = self.checked_range_table(input.pool).await?;
        self.pools
            .replace_pool(id, &input)
            .await?
            .ok_or(GachaError::PoolNotFound(PoolKey::Id(id)))
    }

    pub async fn find_pool(&self, id: DbId) -> Result<ItemPool, GachaError> {
        self.pools
            .find_pool(id)
            .await?
            .ok_or(GachaError::PoolNotFound(PoolKey::Id(id)))
    }

    pub async fn list_pools(&self) -> Result<Vec<ItemPool>, GachaError> {
        Ok(self.pools.list_pools().await?)
    }

    pub async fn count_pools(&self) -> Result<i64, GachaError> {
        Ok(self.pools.count_pools().await?)
    }

    pub async fn delete_pool(&self, id: DbId) -> Result<(), GachaError> {
        if self.pools.delete_pool(id).await? {
            Ok(())
        } else {
            Err(GachaError::PoolNotFound(PoolKey::Id(id)))
        }
    }

    /// Current inventory of `user_id`.
    pub async fn inventory(&self, user_id: DbId) -> Result<Vec<InventorySlot>, GachaError> {
        self.users
            .find_user(user_id)
            .await?
            .ok_or(GachaError::UserNotFound(user_id))?;
        Ok(self.users.list_inventory(user_id).await?)
    }

    async fn checked_range_table(&self, ranges: Vec<Range>) -> Result<Vec<Range>, GachaError> {
        let ranges = build_range_table(ranges)?;
        for range in &ranges {
            self.require_item(&range.item_id).await?;
        }
        Ok(ranges)
    }

    async fn require_item(&self, item_id: &str) -> Result<Item, GachaError> {
        self.catalog
            .find_item(item_id)
            .await?
            .ok_or_else(|| GachaError::ItemNotFound(item_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::memory::MemoryStore;
    use crate::roll::{FixedRoll, UniformRoll};

    fn catalog_item(item_id: &str, name: &str) -> Item {
        Item {
            id: 0,
            item_id: item_id.into(),
            name: name.into(),
            rarity: "common".into(),
            description: String::new(),
            details: String::new(),
            image: None,
        }
    }

    async fn setup() -> (Arc<MemoryStore>, RollService, DbId) {
        let store = Arc::new(MemoryStore::new());
        store.insert_item(catalog_item("0", "Sword")).await;
        store.insert_item(catalog_item("1", "Shield")).await;
        let user_id = store.insert_user("john").await;
        let service = RollService::new(store.clone(), store.clone(), store.clone());
        (store, service, user_id)
    }

    fn standard_pool(ranges: Vec<Range>) -> NewPool {
        NewPool {
            pool_type: "standard".into(),
            title: "Standard".into(),
            description: String::new(),
            image: None,
            pool: ranges,
        }
    }

    #[tokio::test]
    async fn roll_grants_item_and_updates_inventory() {
        let (_store, service, user_id) = setup().await;
        service
            .create_pool(standard_pool(vec![
                Range::new(0, 10, "0", 1),
                Range::new(11, 20, "1", 1),
            ]))
            .await
            .unwrap();

        let item = service
            .roll_for_user(user_id, "standard", &mut FixedRoll::always(5))
            .await
            .unwrap();
        assert_eq!(item.name, "Sword");

        let inventory = service.inventory(user_id).await.unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].item_id, "0");
        assert_eq!(inventory[0].item.as_ref().map(|i| i.name.as_str()), Some("Sword"));
    }

    #[tokio::test]
    async fn repeated_rolls_accumulate_in_one_slot() {
        let (_store, service, user_id) = setup().await;
        service
            .create_pool(standard_pool(vec![Range::new(50, 60, "1", 3)]))
            .await
            .unwrap();

        let mut source = UniformRoll::seeded(1);
        for _ in 0..4 {
            service
                .roll_for_user(user_id, "standard", &mut source)
                .await
                .unwrap();
        }

        let inventory = service.inventory(user_id).await.unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].amount, 12);
    }

    #[tokio::test]
    async fn unknown_pool_type_is_reported() {
        let (_store, service, user_id) = setup().await;
        let err = service
            .roll_for_user(user_id, "missing", &mut FixedRoll::always(0))
            .await
            .unwrap_err();
        assert_matches!(err, GachaError::PoolNotFound(PoolKey::Type(t)) if t == "missing");
    }

    #[tokio::test]
    async fn unknown_user_is_reported() {
        let (_store, service, _user_id) = setup().await;
        service
            .create_pool(standard_pool(vec![Range::new(0, 10, "0", 1)]))
            .await
            .unwrap();
        let err = service
            .roll_for_user(999, "standard", &mut FixedRoll::always(0))
            .await
            .unwrap_err();
        assert_matches!(err, GachaError::UserNotFound(999));
    }

    #[tokio::test]
    async fn rolling_an_empty_pool_fails() {
        let (_store, service, user_id) = setup().await;
        service.create_pool(standard_pool(Vec::new())).await.unwrap();
        let err = service
            .roll_for_user(user_id, "standard", &mut FixedRoll::always(50))
            .await
            .unwrap_err();
        assert_matches!(err, GachaError::EmptyPool { .. });
        assert!(service.inventory(user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_range_persists_valid_candidates() {
        let (store, service, _user_id) = setup().await;
        let pool = service
            .create_pool(standard_pool(vec![Range::new(0, 10, "0", 1)]))
            .await
            .unwrap();

        let updated = service.add_range(pool.id, "1", 20, 30, 1).await.unwrap();
        assert_eq!(updated.pool.len(), 2);

        let stored = store.find_pool(pool.id).await.unwrap().unwrap();
        assert_eq!(stored.pool, updated.pool);
    }

    #[tokio::test]
    async fn add_range_rejects_overlap_without_persisting() {
        let (store, service, _user_id) = setup().await;
        let pool = service
            .create_pool(standard_pool(vec![Range::new(0, 10, "0", 1)]))
            .await
            .unwrap();

        let err = service.add_range(pool.id, "1", 2, 8, 1).await.unwrap_err();
        assert_matches!(err, GachaError::Overlap { .. });

        let stored = store.find_pool(pool.id).await.unwrap().unwrap();
        assert_eq!(stored.pool.len(), 1);
    }

    #[tokio::test]
    async fn add_range_validates_bounds_before_lookups() {
        let (_store, service, _user_id) = setup().await;
        // Pool 404 does not exist, yet the bounds error wins.
        let err = service.add_range(404, "0", 10, 5, 1).await.unwrap_err();
        assert_matches!(err, GachaError::InvalidRange("max < min"));
    }

    #[tokio::test]
    async fn add_range_requires_known_item() {
        let (_store, service, _user_id) = setup().await;
        let pool = service.create_pool(standard_pool(Vec::new())).await.unwrap();
        let err = service.add_range(pool.id, "77", 0, 5, 1).await.unwrap_err();
        assert_matches!(err, GachaError::ItemNotFound(id) if id == "77");
    }

    #[tokio::test]
    async fn create_pool_rejects_conflicting_table() {
        let (_store, service, _user_id) = setup().await;
        let err = service
            .create_pool(standard_pool(vec![
                Range::new(0, 10, "0", 1),
                Range::new(2, 8, "1", 1),
            ]))
            .await
            .unwrap_err();
        assert_matches!(err, GachaError::Overlap { min: 0, max: 10 });
    }

    #[tokio::test]
    async fn non_positive_amounts_never_reach_the_store() {
        let (store, service, user_id) = setup().await;

        for amount in [0, -1] {
            let err = service
                .create_pool(standard_pool(vec![Range::new(0, 10, "0", amount)]))
                .await
                .unwrap_err();
            assert_matches!(err, GachaError::InvalidRange("amount < 1"));
        }
        assert_eq!(store.count_pools().await.unwrap(), 0);

        let pool = service
            .create_pool(standard_pool(vec![Range::new(0, 10, "0", 1)]))
            .await
            .unwrap();

        for amount in [0, -1] {
            let err = service
                .replace_pool(pool.id, standard_pool(vec![Range::new(0, 10, "0", amount)]))
                .await
                .unwrap_err();
            assert_matches!(err, GachaError::InvalidRange("amount < 1"));

            let err = service
                .add_range(pool.id, "1", 20, 30, amount)
                .await
                .unwrap_err();
            assert_matches!(err, GachaError::InvalidRange("amount < 1"));
        }

        let stored = store.find_pool(pool.id).await.unwrap().unwrap();
        assert_eq!(stored.pool, vec![Range::new(0, 10, "0", 1)]);

        service
            .roll_for_user(user_id, "standard", &mut FixedRoll::always(5))
            .await
            .unwrap();
        let inventory = service.inventory(user_id).await.unwrap();
        assert_eq!(inventory[0].amount, 1);
    }

    #[tokio::test]
    async fn replace_missing_pool_is_not_found() {
        let (_store, service, _user_id) = setup().await;
        let err = service
            .replace_pool(5, standard_pool(Vec::new()))
            .await
            .unwrap_err();
        assert_matches!(err, GachaError::PoolNotFound(PoolKey::Id(5)));
    }

    #[tokio::test]
    async fn deleted_pool_can_no_longer_be_rolled() {
        let (_store, service, user_id) = setup().await;
        let pool = service
            .create_pool(standard_pool(vec![Range::new(0, 10, "0", 1)]))
            .await
            .unwrap();
        assert_eq!(service.count_pools().await.unwrap(), 1);

        service.delete_pool(pool.id).await.unwrap();
        assert!(service.list_pools().await.unwrap().is_empty());
        assert_matches!(
            service.delete_pool(pool.id).await,
            Err(GachaError::PoolNotFound(PoolKey::Id(_)))
        );
        assert_matches!(
            service
                .roll_for_user(user_id, "standard", &mut FixedRoll::always(5))
                .await,
            Err(GachaError::PoolNotFound(PoolKey::Type(_)))
        );
    }

    #[tokio::test]
    async fn lookup_by_type_is_stable() {
        let (store, service, _user_id) = setup().await;
        service
            .create_pool(standard_pool(vec![
                Range::new(0, 10, "0", 1),
                Range::new(20, 30, "1", 2),
            ]))
            .await
            .unwrap();

        let first = store.find_pool_by_type("standard").await.unwrap().unwrap();
        let second = store.find_pool_by_type("standard").await.unwrap().unwrap();
        assert_eq!(first.pool, second.pool);
    }
}
