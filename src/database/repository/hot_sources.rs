use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::error::RepositoryError;
use crate::database::models::{HotSource, HotSourceCreate, HotSourceUpdate};

#[derive(Clone)]
pub struct HotSourceRepository {
    pool: SqlitePool,
}

impl HotSourceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, owner_id: i64) -> Result<Vec<HotSource>, RepositoryError> {
        let sources = sqlx::query_as::<_, HotSource>(
            "SELECT * FROM hot_sources WHERE user_id = ? \
             ORDER BY sort_order ASC, created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sources)
    }

    pub async fn create(
        &self,
        fields: HotSourceCreate,
        owner_id: i64,
    ) -> Result<HotSource, RepositoryError> {
        sqlx::query_as::<_, HotSource>(
            "INSERT INTO hot_sources \
             (name, url, icon, type, enable_preview, sort_order, user_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(fields.name)
        .bind(fields.url)
        .bind(fields.icon)
        .bind(fields.kind)
        .bind(fields.enable_preview)
        .bind(fields.sort_order.unwrap_or(0))
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::CreateFailed("hot source"))
    }

    pub async fn update(
        &self,
        id: i64,
        fields: HotSourceUpdate,
        owner_id: i64,
    ) -> Result<HotSource, RepositoryError> {
        let HotSourceUpdate {
            name,
            url,
            icon,
            kind,
            enable_preview,
            sort_order,
        } = fields;

        if name.is_none()
            && url.is_none()
            && icon.is_none()
            && kind.is_none()
            && enable_preview.is_none()
            && sort_order.is_none()
        {
            return Err(RepositoryError::NoFieldsToUpdate);
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE hot_sources SET ");
        let mut sets = qb.separated(", ");
        if let Some(name) = name {
            sets.push("name = ");
            sets.push_bind_unseparated(name);
        }
        if let Some(url) = url {
            sets.push("url = ");
            sets.push_bind_unseparated(url);
        }
        if let Some(icon) = icon {
            sets.push("icon = ");
            sets.push_bind_unseparated(icon);
        }
        if let Some(kind) = kind {
            sets.push("type = ");
            sets.push_bind_unseparated(kind);
        }
        if let Some(enable_preview) = enable_preview {
            sets.push("enable_preview = ");
            sets.push_bind_unseparated(enable_preview);
        }
        if let Some(sort_order) = sort_order {
            sets.push("sort_order = ");
            sets.push_bind_unseparated(sort_order);
        }
        sets.push("updated_at = CURRENT_TIMESTAMP");

        qb.push(" WHERE id = ")
            .push_bind(id)
            .push(" AND user_id = ")
            .push_bind(owner_id)
            .push(" RETURNING *");

        qb.build_query_as::<HotSource>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFoundOrUnauthorized("Hot source"))
    }

    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM hot_sources WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFoundOrUnauthorized("Hot source"));
        }
        Ok(())
    }
}
