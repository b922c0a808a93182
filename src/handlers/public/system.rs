use axum::extract::State;
use serde_json::{json, Value};

use crate::database::models::system_config::DEFAULT_SITE_TITLE;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/system/config - public site config, defaults when absent
///
/// The dashboard is single-owner in practice: the public read serves the
/// first account's config.
pub async fn get_config(State(state): State<AppState>) -> ApiResult<Value> {
    let data = match state.system_config.get(1).await? {
        Some(config) => json!({
            "site_title": config.site_title,
            "icp_record": config.icp_record,
        }),
        None => json!({
            "site_title": DEFAULT_SITE_TITLE,
            "icp_record": null,
        }),
    };

    Ok(ApiResponse::new("Success", data))
}
