use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookmarkCategory {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    pub sort_order: i64,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Default)]
pub struct CategoryCreate {
    pub name: String,
    pub icon: Option<String>,
    pub sort_order: Option<i64>,
}

#[derive(Debug, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i64>,
}
