use std::sync::Arc;

use gacha_core::service::RollService;
use gacha_db::stores::PgStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and the service handles are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gacha_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// Roll service wired to PostgreSQL-backed stores.
    pub rolls: RollService,
}

impl AppState {
    pub fn new(pool: gacha_db::DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(PgStore::new(pool.clone()));
        let rolls = RollService::new(store.clone(), store.clone(), store);
        Self {
            pool,
            config: Arc::new(config),
            rolls,
        }
    }
}
