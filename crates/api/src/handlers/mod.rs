//! Request handlers, one submodule per resource.
//!
//! Plain catalog CRUD goes straight to the repositories in `gacha_db`;
//! anything touching range tables, rolls or inventories goes through the
//! [`RollService`](gacha_core::service::RollService) held in the app state.

pub mod admin;
pub mod auth;
pub mod items;
pub mod pools;
pub mod users;

use serde::Serialize;

/// Body of the `/count` endpoints.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}
