use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Site title used when a user has no stored config row.
pub const DEFAULT_SITE_TITLE: &str = "Home Nav";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SystemConfig {
    pub id: i64,
    pub site_title: String,
    pub icp_record: Option<String>,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Default, Deserialize)]
pub struct SystemConfigUpdate {
    pub site_title: Option<String>,
    pub icp_record: Option<String>,
}
