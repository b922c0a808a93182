use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::database::models::{HotSource, HotSourceCreate, HotSourceUpdate};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HotSourcePayload {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub enable_preview: Option<bool>,
    pub sort_order: Option<i64>,
}

/// GET /api/hot/sources - the caller's hot-search sources
pub async fn get_sources(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<HotSource>> {
    let sources = state.hot_sources.list(auth.id).await?;
    Ok(ApiResponse::new("Success", sources))
}

/// POST /api/hot/sources - add a hot-search source
pub async fn add_source(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<HotSourcePayload>,
) -> ApiResult<HotSource> {
    let (Some(name), Some(url), Some(icon), Some(kind)) = (
        payload.name.filter(|s| !s.is_empty()),
        payload.url.filter(|s| !s.is_empty()),
        payload.icon.filter(|s| !s.is_empty()),
        payload.kind.filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let source = state
        .hot_sources
        .create(
            HotSourceCreate {
                name,
                url,
                icon,
                kind,
                enable_preview: payload.enable_preview.unwrap_or(false),
                sort_order: payload.sort_order,
            },
            auth.id,
        )
        .await?;

    Ok(ApiResponse::new("Hot source created successfully", source))
}

/// PUT /api/hot/sources/:id - update a hot-search source
pub async fn update_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<HotSourcePayload>,
) -> ApiResult<HotSource> {
    if payload.name.as_deref().map_or(true, str::is_empty)
        || payload.url.as_deref().map_or(true, str::is_empty)
        || payload.icon.as_deref().map_or(true, str::is_empty)
        || payload.kind.as_deref().map_or(true, str::is_empty)
    {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    let fields = HotSourceUpdate {
        name: payload.name,
        url: payload.url,
        icon: payload.icon,
        kind: payload.kind,
        enable_preview: payload.enable_preview,
        sort_order: payload.sort_order,
    };

    let source = state.hot_sources.update(id, fields, auth.id).await?;
    Ok(ApiResponse::new("Hot source updated successfully", source))
}

/// DELETE /api/hot/sources/:id - delete a hot-search source
pub async fn delete_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<()> {
    state.hot_sources.delete(id, auth.id).await?;
    Ok(ApiResponse::message("Hot source deleted successfully"))
}
