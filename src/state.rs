use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::database;
use crate::database::repository::{
    BookmarkRepository, CategoryRepository, HotSourceRepository, SearchEngineRepository,
    SystemConfigRepository, UserRepository,
};
use crate::services::weather::WeatherClient;

/// Composition root. Every repository is constructed here with its storage
/// handle and carried through the router; nothing hangs off process-wide
/// statics.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pool: SqlitePool,
    pub users: UserRepository,
    pub categories: CategoryRepository,
    pub bookmarks: BookmarkRepository,
    pub search_engines: SearchEngineRepository,
    pub hot_sources: HotSourceRepository,
    pub system_config: SystemConfigRepository,
    pub weather: WeatherClient,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self, sqlx::Error> {
        let pool = database::connect(&config.database).await?;
        database::ensure_schema(&pool).await?;

        let weather = WeatherClient::new(config.weather.api_url.clone());

        Ok(Self {
            config: Arc::new(config),
            users: UserRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            bookmarks: BookmarkRepository::new(pool.clone()),
            search_engines: SearchEngineRepository::new(pool.clone()),
            hot_sources: HotSourceRepository::new(pool.clone()),
            system_config: SystemConfigRepository::new(pool.clone()),
            weather,
            pool,
        })
    }
}
