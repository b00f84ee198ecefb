//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `users.role` in the initial
//! migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Whether `role` is one of the known role names.
pub fn is_known_role(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_USER
}
