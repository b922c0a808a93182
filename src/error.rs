// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::error::RepositoryError;
use crate::services::weather::WeatherError;

/// HTTP API error with the status codes and client-facing messages the
/// response envelope exposes. `code` in the body mirrors the HTTP status.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request: missing/malformed fields, duplicate quick commands,
    // categories that still hold bookmarks
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found: owner-scoped lookup miss; deliberately conflates
    // "wrong id" and "wrong owner" so record existence never leaks
    NotFound(String),

    // 500 Internal Server Error (unexpected; details stay in the logs)
    Internal(String),

    // 500 upstream weather provider failure, message already mapped
    Upstream(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg)
            | ApiError::Upstream(msg) => msg,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "code": self.status_code().as_u16(),
            "message": self.message(),
        })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFoundOrUnauthorized(entity) => {
                ApiError::not_found(format!("{} not found or unauthorized", entity))
            }
            RepositoryError::NoFieldsToUpdate => ApiError::bad_request("No fields to update"),
            RepositoryError::CategoryNotEmpty => {
                ApiError::bad_request("Category still contains bookmarks, delete them first")
            }
            RepositoryError::DuplicateQuickCommand { command, engine } => ApiError::bad_request(
                format!("Quick command \"{}\" is already assigned to \"{}\"", command, engine),
            ),
            RepositoryError::CreateFailed(entity) => {
                tracing::error!("Insert returned no row for {}", entity);
                ApiError::internal("Internal server error")
            }
            RepositoryError::Json(e) => {
                tracing::error!("JSON serialization error: {}", e);
                ApiError::internal("Internal server error")
            }
            RepositoryError::Sqlx(e) => {
                // Don't expose SQL errors to clients
                tracing::error!("Database error: {}", e);
                ApiError::internal("Internal server error")
            }
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing error: {}", err);
        ApiError::internal("Internal server error")
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::NotConfigured => {
                ApiError::bad_request("Weather parameters are not configured")
            }
            WeatherError::Provider(message) => ApiError::Upstream(message),
            WeatherError::NoData => ApiError::Upstream("Weather data is unavailable".to_string()),
            WeatherError::Request(e) => {
                tracing::error!("Weather request error: {}", e);
                ApiError::Upstream("Weather service request failed".to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
