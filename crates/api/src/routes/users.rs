//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`. Callers act on their own id unless admin.
///
/// ```text
/// POST   /{user_id}/roll        -> roll
/// GET    /{user_id}/inventory   -> inventory
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/roll", post(users::roll))
        .route("/{user_id}/inventory", get(users::inventory))
}
