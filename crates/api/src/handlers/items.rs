//! Handlers for the `/items` catalog resource.
//!
//! Catalog keys (`itemId`) are assigned here on creation and never change.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gacha_core::error::CoreError;
use gacha_core::item::{next_item_id, Item};
use gacha_core::types::DbId;
use gacha_db::models::item::{CreateItem, UpdateItem};
use gacha_db::repositories::{ItemPoolRepo, ItemRepo};

use super::CountResponse;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Item", id })
}

/// POST /api/v1/items
///
/// The new item's `itemId` is the highest existing key plus one. Two
/// concurrent creations can compute the same key; the loser gets a 409 from
/// the unique constraint.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let last = ItemRepo::last_item_id(&state.pool).await?;
    let item_id = next_item_id(last.as_deref())?;

    let item: Item = ItemRepo::create(&state.pool, &item_id, &input).await?.into();
    tracing::info!(id = item.id, item_id = %item.item_id, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/items
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Item>>> {
    let items = ItemRepo::list(&state.pool).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/items/count
pub async fn count(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<CountResponse>> {
    let count = ItemRepo::count(&state.pool).await?;
    Ok(Json(CountResponse { count }))
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item.into()))
}

/// PATCH /api/v1/items/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item.into()))
}

/// PUT /api/v1/items/{id}
///
/// Replaces every field except the catalog key.
pub async fn replace(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<CreateItem>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item.into()))
}

/// DELETE /api/v1/items/{id}
///
/// Refused with 409 while any pool range still grants the item. Inventory
/// slots holding it are removed along with it.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let pool_types = ItemPoolRepo::types_referencing_item(&state.pool, &item.item_id).await?;
    if !pool_types.is_empty() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Item {} is still granted by pools: {}",
            item.item_id,
            pool_types.join(", ")
        ))));
    }

    if ItemRepo::delete(&state.pool, id).await? {
        tracing::info!(id, item_id = %item.item_id, "Item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
