//! Handlers for the `/admin` resource (user management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gacha_core::error::CoreError;
use gacha_core::roles::{is_known_role, ROLE_USER};
use gacha_db::models::user::{CreateUser, UserResponse};
use gacha_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Minimum password length enforced on user creation.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// `"admin"` or `"user"`; defaults to `"user"`.
    pub role: Option<String>,
}

/// POST /api/v1/admin/users
///
/// Create a new user with a hashed password. Returns 201 Created.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let role = input.role.unwrap_or_else(|| ROLE_USER.to_string());
    if !is_known_role(&role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role '{role}'"
        ))));
    }

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash: hashed,
        role,
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;
    tracing::info!(user_id = user.id, created_by = admin.user_id, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}
