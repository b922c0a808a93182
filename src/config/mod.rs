use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Default live-weather endpoint (Amap district weather).
pub const DEFAULT_WEATHER_API_URL: &str = "https://restapi.amap.com/v3/weather/weatherInfo";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub token_expiry_days: i64,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub api_url: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// The signing secret has no fallback: startup must fail when
    /// JWT_SECRET is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            server: ServerConfig {
                port: env_parse("PORT", 3001),
            },
            database: DatabaseConfig {
                path: env::var("DB_PATH").unwrap_or_else(|_| "database/nav.db".to_string()),
                max_connections: env_parse("DATABASE_MAX_CONNECTIONS", 5),
            },
            security: SecurityConfig {
                jwt_secret,
                token_expiry_days: env_parse("TOKEN_EXPIRY_DAYS", 7),
                bcrypt_cost: env_parse("SALT_ROUNDS", 10),
            },
            weather: WeatherConfig {
                api_url: env::var("WEATHER_API_URL")
                    .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string()),
            },
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
