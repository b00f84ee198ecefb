pub mod admin;
pub mod auth;
pub mod health;
pub mod items;
pub mod pools;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
///
/// /admin/users                                     list, create (admin only)
///
/// /items                                           list, create (admin only)
/// /items/count                                     count (admin only)
/// /items/{id}                                      get, patch, replace, delete (admin only)
///
/// /pools                                           list (public), create (admin)
/// /pools/count                                     count (public)
/// /pools/{id}                                      get (public), patch, replace, delete (admin)
/// /pools/{id}/items/{item_id}                      add range (admin)
///
/// /users/{user_id}/roll                            roll (self or admin)
/// /users/{user_id}/inventory                       inventory (self or admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/items", items::router())
        .nest("/pools", pools::router())
        .nest("/users", users::router())
}
