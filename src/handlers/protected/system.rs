use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::database::models::SystemConfigUpdate;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// PUT /api/system/config - create or patch the caller's site config
pub async fn update_config(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<SystemConfigUpdate>,
) -> ApiResult<Value> {
    let config = state.system_config.update(auth.id, payload).await?;

    Ok(ApiResponse::new(
        "Config updated successfully",
        json!({
            "site_title": config.site_title,
            "icp_record": config.icp_record,
        }),
    ))
}
