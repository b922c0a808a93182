use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::error::RepositoryError;
use crate::database::models::{Bookmark, BookmarkCreate, BookmarkUpdate};

#[derive(Clone)]
pub struct BookmarkRepository {
    pool: SqlitePool,
}

impl BookmarkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, owner_id: i64) -> Result<Vec<Bookmark>, RepositoryError> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(
            "SELECT * FROM bookmarks WHERE user_id = ? \
             ORDER BY sort_order ASC, created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookmarks)
    }

    pub async fn create(
        &self,
        fields: BookmarkCreate,
        owner_id: i64,
    ) -> Result<Bookmark, RepositoryError> {
        sqlx::query_as::<_, Bookmark>(
            "INSERT INTO bookmarks \
             (name, category_id, internal_url, external_url, icon, remark, sort_order, user_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(fields.name)
        .bind(fields.category_id)
        .bind(fields.internal_url.unwrap_or_default())
        .bind(fields.external_url.unwrap_or_default())
        .bind(fields.icon.unwrap_or_default())
        .bind(fields.remark.unwrap_or_default())
        .bind(fields.sort_order.unwrap_or(0))
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::CreateFailed("bookmark"))
    }

    pub async fn update(
        &self,
        id: i64,
        fields: BookmarkUpdate,
        owner_id: i64,
    ) -> Result<Bookmark, RepositoryError> {
        let BookmarkUpdate {
            name,
            category_id,
            internal_url,
            external_url,
            icon,
            remark,
            sort_order,
        } = fields;

        if name.is_none()
            && category_id.is_none()
            && internal_url.is_none()
            && external_url.is_none()
            && icon.is_none()
            && remark.is_none()
            && sort_order.is_none()
        {
            return Err(RepositoryError::NoFieldsToUpdate);
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE bookmarks SET ");
        let mut sets = qb.separated(", ");
        if let Some(name) = name {
            sets.push("name = ");
            sets.push_bind_unseparated(name);
        }
        if let Some(category_id) = category_id {
            sets.push("category_id = ");
            sets.push_bind_unseparated(category_id);
        }
        if let Some(internal_url) = internal_url {
            sets.push("internal_url = ");
            sets.push_bind_unseparated(internal_url);
        }
        if let Some(external_url) = external_url {
            sets.push("external_url = ");
            sets.push_bind_unseparated(external_url);
        }
        if let Some(icon) = icon {
            sets.push("icon = ");
            sets.push_bind_unseparated(icon);
        }
        if let Some(remark) = remark {
            sets.push("remark = ");
            sets.push_bind_unseparated(remark);
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

        qb.build_query_as::<Bookmark>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFoundOrUnauthorized("Bookmark"))
    }

    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFoundOrUnauthorized("Bookmark"));
        }
        Ok(())
    }
}
