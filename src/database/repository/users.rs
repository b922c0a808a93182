use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::error::RepositoryError;
use crate::database::models::{User, UserUpdate};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Insert a new user. The password must already be hashed.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        avatar: Option<&str>,
    ) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, avatar) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(username)
        .bind(password_hash)
        .bind(avatar)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::CreateFailed("user"))
    }

    /// Partial-field update; only supplied fields are touched and
    /// `updated_at` is always bumped.
    pub async fn update(&self, id: i64, fields: UserUpdate) -> Result<User, RepositoryError> {
        let UserUpdate {
            avatar,
            weather_adcode,
            weather_key,
            container_config,
        } = fields;

        if avatar.is_none()
            && weather_adcode.is_none()
            && weather_key.is_none()
            && container_config.is_none()
        {
            return Err(RepositoryError::NoFieldsToUpdate);
        }

        let container_config = container_config
            .map(|c| serde_json::to_string(&c))
            .transpose()?;

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut sets = qb.separated(", ");
        if let Some(avatar) = avatar {
            sets.push("avatar = ");
            sets.push_bind_unseparated(avatar);
        }
        if let Some(adcode) = weather_adcode {
            sets.push("weather_adcode = ");
            sets.push_bind_unseparated(adcode);
        }
        if let Some(key) = weather_key {
            sets.push("weather_key = ");
            sets.push_bind_unseparated(key);
        }
        if let Some(config) = container_config {
            sets.push("container_config = ");
            sets.push_bind_unseparated(config);
        }
        sets.push("updated_at = CURRENT_TIMESTAMP");

        qb.push(" WHERE id = ")
            .push_bind(id)
            .push(" RETURNING *");

        qb.build_query_as::<User>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFoundOrUnauthorized("User"))
    }
}
