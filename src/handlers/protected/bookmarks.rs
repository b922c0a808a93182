use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::database::models::{
    Bookmark, BookmarkCategory, BookmarkCreate, BookmarkUpdate, CategoryCreate, CategoryUpdate,
};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct BookmarkPayload {
    pub name: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<i64>,
    #[serde(rename = "internalUrl")]
    pub internal_url: Option<String>,
    #[serde(rename = "externalUrl")]
    pub external_url: Option<String>,
    pub icon: Option<String>,
    pub remark: Option<String>,
    pub sort_order: Option<i64>,
}

/// GET /api/bookmarks/categories - the caller's categories
pub async fn get_categories(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<BookmarkCategory>> {
    let categories = state.categories.list(auth.id).await?;
    Ok(ApiResponse::new("Success", categories))
}

/// POST /api/bookmarks/categories - add a category
pub async fn add_category(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CategoryPayload>,
) -> ApiResult<BookmarkCategory> {
    let Some(name) = payload.name.filter(|n| !n.is_empty()) else {
        return Err(ApiError::bad_request("Category name is required"));
    };

    let category = state
        .categories
        .create(
            CategoryCreate {
                name,
                icon: payload.icon,
                sort_order: payload.sort_order,
            },
            auth.id,
        )
        .await?;

    Ok(ApiResponse::new("Category created successfully", category))
}

/// PUT /api/bookmarks/categories/:id - update a category
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CategoryPayload>,
) -> ApiResult<BookmarkCategory> {
    let Some(name) = payload.name.filter(|n| !n.is_empty()) else {
        return Err(ApiError::bad_request("Category name is required"));
    };

    // The icon is always rewritten on update; omitting it clears it.
    let fields = CategoryUpdate {
        name: Some(name),
        icon: Some(payload.icon.unwrap_or_default()),
        sort_order: payload.sort_order,
    };

    let category = state.categories.update(id, fields, auth.id).await?;
    Ok(ApiResponse::new("Category updated successfully", category))
}

/// DELETE /api/bookmarks/categories/:id - delete an empty category
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<()> {
    state.categories.delete(id, auth.id).await?;
    Ok(ApiResponse::message("Category deleted successfully"))
}

/// GET /api/bookmarks - the caller's bookmarks
pub async fn get_bookmarks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<Bookmark>> {
    let bookmarks = state.bookmarks.list(auth.id).await?;
    Ok(ApiResponse::new("Success", bookmarks))
}

/// POST /api/bookmarks - add a bookmark
pub async fn add_bookmark(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<BookmarkPayload>,
) -> ApiResult<Bookmark> {
    let (Some(name), Some(category_id)) =
        (payload.name.filter(|n| !n.is_empty()), payload.category_id)
    else {
        return Err(ApiError::bad_request("Name and category ID are required"));
    };

    let bookmark = state
        .bookmarks
        .create(
            BookmarkCreate {
                name,
                category_id,
                internal_url: payload.internal_url,
                external_url: payload.external_url,
                icon: payload.icon,
                remark: payload.remark,
                sort_order: payload.sort_order,
            },
            auth.id,
        )
        .await?;

    Ok(ApiResponse::new("Bookmark created successfully", bookmark))
}

/// PUT /api/bookmarks/:id - update a bookmark
pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<BookmarkPayload>,
) -> ApiResult<Bookmark> {
    if payload.name.as_deref().map_or(true, str::is_empty) || payload.category_id.is_none() {
        return Err(ApiError::bad_request("Name and category ID are required"));
    }

    let fields = BookmarkUpdate {
        name: payload.name,
        category_id: payload.category_id,
        internal_url: payload.internal_url,
        external_url: payload.external_url,
        icon: payload.icon,
        remark: payload.remark,
        sort_order: payload.sort_order,
    };

    let bookmark = state.bookmarks.update(id, fields, auth.id).await?;
    Ok(ApiResponse::new("Bookmark updated successfully", bookmark))
}

/// DELETE /api/bookmarks/:id - delete a bookmark
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<()> {
    state.bookmarks.delete(id, auth.id).await?;
    Ok(ApiResponse::message("Bookmark deleted successfully"))
}
