use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::database::models::{SearchEngine, SearchEngineCreate, SearchEngineUpdate};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchEnginePayload {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "searchUrl")]
    pub search_url: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<i64>,
    #[serde(rename = "quickCommand")]
    pub quick_command: Option<String>,
}

/// GET /api/search/engines - the caller's search engines
pub async fn get_engines(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<SearchEngine>> {
    let engines = state.search_engines.list(auth.id).await?;
    Ok(ApiResponse::new("Success", engines))
}

/// POST /api/search/engines - add a search engine
pub async fn add_engine(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<SearchEnginePayload>,
) -> ApiResult<SearchEngine> {
    let (Some(name), Some(search_url), Some(icon)) = (
        payload.name.filter(|s| !s.is_empty()),
        payload.search_url.filter(|s| !s.is_empty()),
        payload.icon.filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::bad_request(
            "Name, search URL and icon are required",
        ));
    };

    let engine = state
        .search_engines
        .create(
            SearchEngineCreate {
                name,
                url: payload.url,
                search_url,
                icon,
                sort_order: payload.sort_order,
                quick_command: payload.quick_command,
            },
            auth.id,
        )
        .await?;

    Ok(ApiResponse::new("Search engine created successfully", engine))
}

/// PUT /api/search/engines/:id - update a search engine
pub async fn update_engine(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<SearchEnginePayload>,
) -> ApiResult<SearchEngine> {
    if payload.name.as_deref().map_or(true, str::is_empty)
        || payload.search_url.as_deref().map_or(true, str::is_empty)
        || payload.icon.as_deref().map_or(true, str::is_empty)
    {
        return Err(ApiError::bad_request(
            "Name, search URL and icon are required",
        ));
    }

    let fields = SearchEngineUpdate {
        name: payload.name,
        url: payload.url,
        search_url: payload.search_url,
        icon: payload.icon,
        sort_order: payload.sort_order,
        quick_command: payload.quick_command,
    };

    let engine = state.search_engines.update(id, fields, auth.id).await?;
    Ok(ApiResponse::new("Search engine updated successfully", engine))
}

/// DELETE /api/search/engines/:id - delete a search engine
pub async fn delete_engine(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<()> {
    state.search_engines.delete(id, auth.id).await?;
    Ok(ApiResponse::message("Search engine deleted successfully"))
}
