//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireSelfOrAdmin`] -- Requires acting on one's own user id, or admin.

pub mod auth;
pub mod rbac;
