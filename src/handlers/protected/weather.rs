use axum::{extract::State, Extension};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::weather::{LiveWeather, WeatherError};
use crate::state::AppState;

/// GET /api/weather/current - proxy the caller's configured weather feed
pub async fn get_current_weather(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<LiveWeather> {
    let user = state
        .users
        .find_by_id(auth.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let (Some(adcode), Some(key)) = (
        user.weather_adcode.as_deref().filter(|s| !s.is_empty()),
        user.weather_key.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(WeatherError::NotConfigured.into());
    };

    let live = state.weather.current(key, adcode).await?;
    Ok(ApiResponse::new("Success", live))
}
