use axum::{extract::State, Extension, Json};

use crate::database::models::{UserSummary, UserUpdate};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/auth/user - current user's profile
pub async fn get_user_info(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<UserSummary> {
    let user = state
        .users
        .find_by_id(auth.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::new("Success", user.summary()))
}

/// PUT /api/auth/user - partial profile update
pub async fn update_user_info(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<UserUpdate>,
) -> ApiResult<UserSummary> {
    let user = state.users.update(auth.id, payload).await?;

    Ok(ApiResponse::new(
        "User info updated successfully",
        user.summary(),
    ))
}
