use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HotSource {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub icon: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub enable_preview: bool,
    pub sort_order: i64,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Default)]
pub struct HotSourceCreate {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub kind: String,
    pub enable_preview: bool,
    pub sort_order: Option<i64>,
}

#[derive(Debug, Default)]
pub struct HotSourceUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub kind: Option<String>,
    pub enable_preview: Option<bool>,
    pub sort_order: Option<i64>,
}
