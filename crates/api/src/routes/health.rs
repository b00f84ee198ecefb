use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, `migrations_pending` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest migration applied to the database.
    pub schema_version: Option<i64>,
    /// Newest migration compiled into this binary.
    pub expected_schema_version: Option<i64>,
    /// Pools available to roll against; absent when the database is down.
    pub pools: Option<i64>,
}

fn overall_status(
    db_healthy: bool,
    schema_version: Option<i64>,
    expected: Option<i64>,
) -> &'static str {
    match (db_healthy, schema_version == expected) {
        (false, _) => "degraded",
        (true, false) => "migrations_pending",
        (true, true) => "ok",
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let expected_schema_version = gacha_db::latest_schema_version();

    let db_healthy = gacha_db::health_check(&state.pool).await.is_ok();
    let (schema_version, pools) = if db_healthy {
        let schema_version = gacha_db::applied_schema_version(&state.pool)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Could not read applied migrations");
                None
            });
        (schema_version, state.rolls.count_pools().await.ok())
    } else {
        (None, None)
    };

    Json(HealthResponse {
        status: overall_status(db_healthy, schema_version, expected_schema_version),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
        expected_schema_version,
        pools,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
