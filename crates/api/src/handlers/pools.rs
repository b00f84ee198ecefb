//! Handlers for the `/pools` resource.
//!
//! Reads are public. Creating, replacing and extending a pool validates its
//! range table through the roll service; patching only touches descriptive
//! fields and goes straight to the repository.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gacha_core::error::{GachaError, PoolKey};
use gacha_core::pool::ItemPool;
use gacha_core::store::NewPool;
use gacha_core::types::DbId;
use gacha_db::models::item_pool::UpdateItemPool;
use gacha_db::repositories::ItemPoolRepo;
use serde::Deserialize;

use super::CountResponse;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /pools/{id}/items/{item_id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRangeRequest {
    pub min_value: i32,
    pub max_value: i32,
    #[serde(default = "default_amount")]
    pub amount: i32,
}

fn default_amount() -> i32 {
    1
}

/// POST /api/v1/pools
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<NewPool>,
) -> AppResult<(StatusCode, Json<ItemPool>)> {
    let pool = state.rolls.create_pool(input).await?;
    tracing::info!(
        pool_id = pool.id,
        pool_type = %pool.pool_type,
        ranges = pool.pool.len(),
        created_by = admin.user_id,
        "Pool created"
    );
    Ok((StatusCode::CREATED, Json(pool)))
}

/// GET /api/v1/pools
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ItemPool>>> {
    Ok(Json(state.rolls.list_pools().await?))
}

/// GET /api/v1/pools/count
pub async fn count(State(state): State<AppState>) -> AppResult<Json<CountResponse>> {
    let count = state.rolls.count_pools().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /api/v1/pools/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemPool>> {
    Ok(Json(state.rolls.find_pool(id).await?))
}

/// PATCH /api/v1/pools/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItemPool>,
) -> AppResult<Json<ItemPool>> {
    let pool = ItemPoolRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Gacha(GachaError::PoolNotFound(PoolKey::Id(id))))?;
    Ok(Json(pool.into()))
}

/// PUT /api/v1/pools/{id}
pub async fn replace(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<NewPool>,
) -> AppResult<Json<ItemPool>> {
    let pool = state.rolls.replace_pool(id, input).await?;
    tracing::info!(pool_id = pool.id, ranges = pool.pool.len(), "Pool replaced");
    Ok(Json(pool))
}

/// DELETE /api/v1/pools/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.rolls.delete_pool(id).await?;
    tracing::info!(pool_id = id, "Pool deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/pools/{id}/items/{item_id}
///
/// Append a range granting `item_id` to the pool. Bounds and amount are
/// checked before the pool and item are looked up.
pub async fn add_range(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((id, item_id)): Path<(DbId, String)>,
    Json(input): Json<AddRangeRequest>,
) -> AppResult<Json<ItemPool>> {
    let pool = state
        .rolls
        .add_range(id, &item_id, input.min_value, input.max_value, input.amount)
        .await?;

    tracing::info!(
        pool_id = pool.id,
        item_id = %item_id,
        min_value = input.min_value,
        max_value = input.max_value,
        amount = input.amount,
        "Range added"
    );
    Ok(Json(pool))
}
