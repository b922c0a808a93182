use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub icon: Option<String>,
    pub remark: Option<String>,
    pub internal_url: Option<String>,
    pub external_url: Option<String>,
    pub sort_order: i64,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Default)]
pub struct BookmarkCreate {
    pub name: String,
    pub category_id: i64,
    pub internal_url: Option<String>,
    pub external_url: Option<String>,
    pub icon: Option<String>,
    pub remark: Option<String>,
    pub sort_order: Option<i64>,
}

#[derive(Debug, Default)]
pub struct BookmarkUpdate {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub internal_url: Option<String>,
    pub external_url: Option<String>,
    pub icon: Option<String>,
    pub remark: Option<String>,
    pub sort_order: Option<i64>,
}
