//! Handlers for the per-user `/users/{user_id}` resource (rolls, inventory).
//!
//! Callers may only act on their own id unless they are admins; see
//! [`RequireSelfOrAdmin`].

use axum::extract::State;
use axum::Json;
use gacha_core::inventory::InventorySlot;
use gacha_core::item::Item;
use gacha_core::roll::UniformRoll;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireSelfOrAdmin;
use crate::state::AppState;

/// Request body for `POST /users/{user_id}/roll`.
#[derive(Debug, Deserialize)]
pub struct RollRequest {
    /// Type of the pool to roll against.
    #[serde(rename = "type")]
    pub pool_type: String,
}

/// POST /api/v1/users/{user_id}/roll
///
/// Roll once against the pool of the requested type. The granted item is
/// added to the user's inventory and returned.
pub async fn roll(
    State(state): State<AppState>,
    RequireSelfOrAdmin { caller, user_id }: RequireSelfOrAdmin,
    Json(input): Json<RollRequest>,
) -> AppResult<Json<Item>> {
    let mut source = UniformRoll::from_os_rng();
    let item = state
        .rolls
        .roll_for_user(user_id, &input.pool_type, &mut source)
        .await?;

    tracing::info!(
        user_id,
        rolled_by = caller.user_id,
        pool_type = %input.pool_type,
        item_id = %item.item_id,
        "Roll granted"
    );
    Ok(Json(item))
}

/// GET /api/v1/users/{user_id}/inventory
pub async fn inventory(
    State(state): State<AppState>,
    RequireSelfOrAdmin { user_id, .. }: RequireSelfOrAdmin,
) -> AppResult<Json<Vec<InventorySlot>>> {
    Ok(Json(state.rolls.inventory(user_id).await?))
}
