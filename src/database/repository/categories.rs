use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::error::RepositoryError;
use crate::database::models::{BookmarkCategory, CategoryCreate, CategoryUpdate};

#[derive(Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, owner_id: i64) -> Result<Vec<BookmarkCategory>, RepositoryError> {
        let categories = sqlx::query_as::<_, BookmarkCategory>(
            "SELECT * FROM bookmark_categories WHERE user_id = ? \
             ORDER BY sort_order ASC, created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn create(
        &self,
        fields: CategoryCreate,
        owner_id: i64,
    ) -> Result<BookmarkCategory, RepositoryError> {
        sqlx::query_as::<_, BookmarkCategory>(
            "INSERT INTO bookmark_categories (name, icon, sort_order, user_id) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(fields.name)
        .bind(fields.icon)
        .bind(fields.sort_order.unwrap_or(0))
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::CreateFailed("category"))
    }

    pub async fn update(
        &self,
        id: i64,
        fields: CategoryUpdate,
        owner_id: i64,
    ) -> Result<BookmarkCategory, RepositoryError> {
        let CategoryUpdate {
            name,
            icon,
            sort_order,
        } = fields;

        if name.is_none() && icon.is_none() && sort_order.is_none() {
            return Err(RepositoryError::NoFieldsToUpdate);
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE bookmark_categories SET ");
        let mut sets = qb.separated(", ");
        if let Some(name) = name {
            sets.push("name = ");
            sets.push_bind_unseparated(name);
        }
        if let Some(icon) = icon {
            sets.push("icon = ");
            sets.push_bind_unseparated(icon);
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

        qb.build_query_as::<BookmarkCategory>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFoundOrUnauthorized("Category"))
    }

    /// Owner-scoped delete, refused while any bookmark still references the
    /// category. The emptiness guard lives in the delete predicate itself so
    /// no bookmark can slip in between a check and the delete.
    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "DELETE FROM bookmark_categories \
             WHERE id = ? AND user_id = ? \
               AND NOT EXISTS (\
                 SELECT 1 FROM bookmarks \
                 WHERE bookmarks.category_id = bookmark_categories.id \
                   AND bookmarks.user_id = ?\
               )",
        )
        .bind(id)
        .bind(owner_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Zero rows: either the category is missing/foreign or the guard
        // fired. An owner-scoped read tells the two apart.
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bookmark_categories WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        if exists > 0 {
            Err(RepositoryError::CategoryNotEmpty)
        } else {
            Err(RepositoryError::NotFoundOrUnauthorized("Category"))
        }
    }
}
