use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub avatar: Option<String>,
    pub weather_adcode: Option<String>,
    pub weather_key: Option<String>,
    pub container_config: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Per-user dashboard container toggles, stored serialized in
/// `users.container_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    pub show_weather: bool,
    pub show_hot_search: bool,
    pub show_bookmark: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            show_weather: true,
            show_hot_search: true,
            show_bookmark: true,
        }
    }
}

/// Parse a stored container config, silently falling back to the default
/// shape when the column is absent or unparsable.
pub fn parse_container_config(raw: Option<&str>) -> ContainerConfig {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

/// Mask a stored weather key: first 6 and last 6 characters stay visible,
/// the middle is starred out. Keys of 12 characters or fewer pass through.
pub fn mask_weather_key(key: &str) -> String {
    let len = key.chars().count();
    if len <= 12 {
        return key.to_string();
    }

    let prefix: String = key.chars().take(6).collect();
    let suffix: String = key.chars().skip(len - 6).collect();
    format!("{}{}{}", prefix, "*".repeat(len - 12), suffix)
}

/// User shape returned to clients. The password hash never leaves the
/// model layer and the weather key is always masked.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub avatar: Option<String>,
    pub weather_adcode: Option<String>,
    pub weather_key: Option<String>,
    pub container_config: ContainerConfig,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            avatar: self.avatar.clone(),
            weather_adcode: self.weather_adcode.clone(),
            weather_key: self.weather_key.as_deref().map(mask_weather_key),
            container_config: parse_container_config(self.container_config.as_deref()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub avatar: Option<String>,
    pub weather_adcode: Option<String>,
    pub weather_key: Option<String>,
    pub container_config: Option<ContainerConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keys_pass_through_unmasked() {
        assert_eq!(mask_weather_key("abcdef123456"), "abcdef123456");
    }

    #[test]
    fn long_keys_keep_six_chars_each_end() {
        assert_eq!(
            mask_weather_key("abcdef1234567890ghij"),
            "abcdef********90ghij"
        );
    }

    #[test]
    fn container_config_round_trips() {
        let cfg = ContainerConfig {
            show_weather: false,
            show_hot_search: true,
            show_bookmark: false,
        };
        let stored = serde_json::to_string(&cfg).unwrap();
        assert_eq!(parse_container_config(Some(&stored)), cfg);
    }

    #[test]
    fn unparsable_config_falls_back_to_default() {
        assert_eq!(
            parse_container_config(Some("not json")),
            ContainerConfig::default()
        );
        assert_eq!(parse_container_config(None), ContainerConfig::default());
    }
}
