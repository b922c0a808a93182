use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::error::RepositoryError;
use crate::database::models::{SearchEngine, SearchEngineCreate, SearchEngineUpdate};

#[derive(Clone)]
pub struct SearchEngineRepository {
    pool: SqlitePool,
}

impl SearchEngineRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, owner_id: i64) -> Result<Vec<SearchEngine>, RepositoryError> {
        let engines = sqlx::query_as::<_, SearchEngine>(
            "SELECT * FROM search_engines WHERE user_id = ? \
             ORDER BY sort_order ASC, created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(engines)
    }

    /// Case-insensitive quick-command lookup under one owner, optionally
    /// excluding the row being updated.
    pub async fn find_by_quick_command(
        &self,
        command: &str,
        owner_id: i64,
        exclude_id: Option<i64>,
    ) -> Result<Option<SearchEngine>, RepositoryError> {
        let engine = match exclude_id {
            Some(exclude) => {
                sqlx::query_as::<_, SearchEngine>(
                    "SELECT * FROM search_engines \
                     WHERE LOWER(quick_command) = LOWER(?) AND user_id = ? AND id != ?",
                )
                .bind(command)
                .bind(owner_id)
                .bind(exclude)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, SearchEngine>(
                    "SELECT * FROM search_engines \
                     WHERE LOWER(quick_command) = LOWER(?) AND user_id = ?",
                )
                .bind(command)
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?
            }
        };
        Ok(engine)
    }

    async fn ensure_quick_command_free(
        &self,
        command: &str,
        owner_id: i64,
        exclude_id: Option<i64>,
    ) -> Result<(), RepositoryError> {
        if let Some(existing) = self
            .find_by_quick_command(command, owner_id, exclude_id)
            .await?
        {
            return Err(RepositoryError::DuplicateQuickCommand {
                command: command.to_string(),
                engine: existing.name,
            });
        }
        Ok(())
    }

    pub async fn create(
        &self,
        fields: SearchEngineCreate,
        owner_id: i64,
    ) -> Result<SearchEngine, RepositoryError> {
        if let Some(command) = &fields.quick_command {
            self.ensure_quick_command_free(command, owner_id, None)
                .await?;
        }

        sqlx::query_as::<_, SearchEngine>(
            "INSERT INTO search_engines \
             (name, url, search_url, icon, sort_order, quick_command, user_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(fields.name)
        .bind(fields.url)
        .bind(fields.search_url)
        .bind(fields.icon)
        .bind(fields.sort_order.unwrap_or(0))
        .bind(fields.quick_command)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::CreateFailed("search engine"))
    }

    pub async fn update(
        &self,
        id: i64,
        fields: SearchEngineUpdate,
        owner_id: i64,
    ) -> Result<SearchEngine, RepositoryError> {
        if let Some(command) = &fields.quick_command {
            self.ensure_quick_command_free(command, owner_id, Some(id))
                .await?;
        }

        let SearchEngineUpdate {
            name,
            url,
            search_url,
            icon,
            sort_order,
            quick_command,
        } = fields;

        if name.is_none()
            && url.is_none()
            && search_url.is_none()
            && icon.is_none()
            && sort_order.is_none()
            && quick_command.is_none()
        {
            return Err(RepositoryError::NoFieldsToUpdate);
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE search_engines SET ");
        let mut sets = qb.separated(", ");
        if let Some(name) = name {
            sets.push("name = ");
            sets.push_bind_unseparated(name);
        }
        if let Some(url) = url {
            sets.push("url = ");
            sets.push_bind_unseparated(url);
        }
        if let Some(search_url) = search_url {
            sets.push("search_url = ");
            sets.push_bind_unseparated(search_url);
        }
        if let Some(icon) = icon {
            sets.push("icon = ");
            sets.push_bind_unseparated(icon);
        }
        if let Some(sort_order) = sort_order {
            sets.push("sort_order = ");
            sets.push_bind_unseparated(sort_order);
        }
        if let Some(quick_command) = quick_command {
            sets.push("quick_command = ");
            sets.push_bind_unseparated(quick_command);
        }
        sets.push("updated_at = CURRENT_TIMESTAMP");

        qb.push(" WHERE id = ")
            .push_bind(id)
            .push(" AND user_id = ")
            .push_bind(owner_id)
            .push(" RETURNING *");

        qb.build_query_as::<SearchEngine>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFoundOrUnauthorized("Search engine"))
    }

    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM search_engines WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFoundOrUnauthorized("Search engine"));
        }
        Ok(())
    }
}
