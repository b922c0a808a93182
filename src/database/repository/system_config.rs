use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::error::RepositoryError;
use crate::database::models::system_config::DEFAULT_SITE_TITLE;
use crate::database::models::{SystemConfig, SystemConfigUpdate};

#[derive(Clone)]
pub struct SystemConfigRepository {
    pool: SqlitePool,
}

impl SystemConfigRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// At most one config row exists per user.
    pub async fn get(&self, owner_id: i64) -> Result<Option<SystemConfig>, RepositoryError> {
        let config =
            sqlx::query_as::<_, SystemConfig>("SELECT * FROM system_configs WHERE user_id = ?")
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(config)
    }

    /// Read-modify-write with implicit upsert: the row is created lazily on
    /// first update with supplied-or-default values; an empty patch leaves an
    /// existing row untouched.
    pub async fn update(
        &self,
        owner_id: i64,
        fields: SystemConfigUpdate,
    ) -> Result<SystemConfig, RepositoryError> {
        let Some(current) = self.get(owner_id).await? else {
            return sqlx::query_as::<_, SystemConfig>(
                "INSERT INTO system_configs (site_title, icp_record, user_id) \
                 VALUES (?, ?, ?) RETURNING *",
            )
            .bind(fields.site_title.as_deref().unwrap_or(DEFAULT_SITE_TITLE))
            .bind(fields.icp_record)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::CreateFailed("system config"));
        };

        let SystemConfigUpdate {
            site_title,
            icp_record,
        } = fields;

        if site_title.is_none() && icp_record.is_none() {
            return Ok(current);
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE system_configs SET ");
        let mut sets = qb.separated(", ");
        if let Some(site_title) = site_title {
            sets.push("site_title = ");
            sets.push_bind_unseparated(site_title);
        }
        if let Some(icp_record) = icp_record {
            sets.push("icp_record = ");
            sets.push_bind_unseparated(icp_record);
        }
        sets.push("updated_at = CURRENT_TIMESTAMP");

        qb.push(" WHERE user_id = ")
            .push_bind(owner_id)
            .push(" RETURNING *");

        qb.build_query_as::<SystemConfig>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFoundOrUnauthorized("System config"))
    }
}
