//! Route definitions for the `/pools` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pools;
use crate::state::AppState;

/// Routes mounted at `/pools`.
///
/// ```text
/// GET    /                       -> list (public)
/// POST   /                       -> create
/// GET    /count                  -> count (public)
/// GET    /{id}                   -> get_by_id (public)
/// PATCH  /{id}                   -> update
/// PUT    /{id}                   -> replace
/// DELETE /{id}                   -> delete
/// POST   /{id}/items/{item_id}   -> add_range
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pools::list).post(pools::create))
        .route("/count", get(pools::count))
        .route(
            "/{id}",
            get(pools::get_by_id)
                .patch(pools::update)
                .put(pools::replace)
                .delete(pools::delete),
        )
        .route("/{id}/items/{item_id}", post(pools::add_range))
}
