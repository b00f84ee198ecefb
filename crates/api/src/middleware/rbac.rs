//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the requirement, so authorization is enforced at the type level.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use gacha_core::error::CoreError;
use gacha_core::types::DbId;
use serde::Deserialize;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

#[derive(Deserialize)]
struct UserIdParam {
    user_id: DbId,
}

/// Guards routes under `/users/{user_id}`: the caller must either be that
/// user or an admin. Carries the target user id from the path.
///
/// ```ignore
/// async fn own_data(RequireSelfOrAdmin { user_id, .. }: RequireSelfOrAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireSelfOrAdmin {
    pub caller: AuthUser,
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for RequireSelfOrAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let caller = AuthUser::from_request_parts(parts, state).await?;

        let Path(UserIdParam { user_id }) = Path::<UserIdParam>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if caller.user_id != user_id && !caller.is_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Cannot act on behalf of another user".into(),
            )));
        }
        Ok(RequireSelfOrAdmin { caller, user_id })
    }
}
