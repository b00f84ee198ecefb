//! Route definitions for the `/items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Routes mounted at `/items`. Admin only.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /count     -> count
/// GET    /{id}      -> get_by_id
/// PATCH  /{id}      -> update
/// PUT    /{id}      -> replace
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list).post(items::create))
        .route("/count", get(items::count))
        .route(
            "/{id}",
            get(items::get_by_id)
                .patch(items::update)
                .put(items::replace)
                .delete(items::delete),
        )
}
