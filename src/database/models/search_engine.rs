use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchEngine {
    pub id: i64,
    pub name: String,
    pub url: Option<String>,
    pub search_url: String,
    pub icon: String,
    pub sort_order: i64,
    pub quick_command: Option<String>,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Default)]
pub struct SearchEngineCreate {
    pub name: String,
    pub url: Option<String>,
    pub search_url: String,
    pub icon: String,
    pub sort_order: Option<i64>,
    pub quick_command: Option<String>,
}

#[derive(Debug, Default)]
pub struct SearchEngineUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub search_url: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i64>,
    pub quick_command: Option<String>,
}
