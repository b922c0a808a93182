use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// The user has not stored an adcode and API key yet.
    #[error("Weather parameters are not configured")]
    NotConfigured,

    /// The provider answered with a non-success status; message already
    /// mapped from its info code.
    #[error("{0}")]
    Provider(String),

    #[error("Weather data is unavailable")]
    NoData,

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// One live weather record as the provider reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveWeather {
    pub province: String,
    pub city: String,
    pub weather: String,
    pub temperature: String,
    pub winddirection: String,
    pub windpower: String,
    pub humidity: String,
    pub reporttime: String,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    info: String,
    #[serde(default)]
    infocode: String,
    lives: Option<Vec<LiveWeather>>,
}

/// Thin passthrough client for the district weather provider. One request
/// per call, no retries; transport defaults govern timeouts.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_url: String,
}

impl WeatherClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Fetch current ("base") weather for an adcode with the caller's key.
    pub async fn current(&self, key: &str, adcode: &str) -> Result<LiveWeather, WeatherError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("key", key), ("city", adcode), ("extensions", "base")])
            .send()
            .await?
            .json::<WeatherResponse>()
            .await?;

        if response.status != "1" {
            return Err(WeatherError::Provider(map_provider_error(
                &response.infocode,
                &response.info,
            )));
        }

        response
            .lives
            .and_then(|mut lives| {
                if lives.is_empty() {
                    None
                } else {
                    Some(lives.remove(0))
                }
            })
            .ok_or(WeatherError::NoData)
    }
}

/// Translate the provider's info codes into messages fit for the caller;
/// unknown codes fall back to the provider's own description.
fn map_provider_error(infocode: &str, info: &str) -> String {
    let message = match infocode {
        "201" => "Missing required request parameters",
        "202" => "Illegal request parameters",
        "203" => "Requested service does not exist",
        "204" => "Request failed",
        "205" => "Invalid request method",
        "206" => "Service failed to respond",
        "207" => "No permission to access this service",
        "INVALID_USER_KEY" => "API key is invalid or expired",
        "DAILY_QUERY_OVER_LIMIT" => "Daily query limit exceeded",
        "ACCESS_TOO_FREQUENT" => "Access too frequent",
        _ => info,
    };
    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_infocodes_are_mapped() {
        assert_eq!(
            map_provider_error("INVALID_USER_KEY", "whatever"),
            "API key is invalid or expired"
        );
        assert_eq!(
            map_provider_error("201", "ignored"),
            "Missing required request parameters"
        );
    }

    #[test]
    fn unknown_infocodes_fall_back_to_provider_info() {
        assert_eq!(
            map_provider_error("90210", "engine overload"),
            "engine overload"
        );
    }
}
