use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::{generate_token, Claims};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /api/auth/register - create an account and issue a token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Value> {
    let (Some(username), Some(password)) = (
        payload.username.filter(|s| !s.is_empty()),
        payload.password.filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Username and password are required"));
    };

    if state.users.find_by_username(&username).await?.is_some() {
        return Err(ApiError::bad_request("Username already exists"));
    }

    let hash = hash_password(&password, state.config.security.bcrypt_cost)?;
    let user = state
        .users
        .create(&username, &hash, payload.avatar.as_deref())
        .await?;

    let token = issue_token(&state, user.id, user.username.clone())?;

    Ok(ApiResponse::new(
        "Register success",
        json!({
            "token": token,
            "user": {
                "id": user.id,
                "username": user.username,
                "avatar": user.avatar,
            },
        }),
    ))
}

/// POST /api/auth/login - verify credentials and issue a token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Value> {
    let (Some(username), Some(password)) = (
        payload.username.filter(|s| !s.is_empty()),
        payload.password.filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Username and password are required"));
    };

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User does not exist"))?;

    if !verify_password(&password, &user.password)? {
        return Err(ApiError::unauthorized("Incorrect password"));
    }

    let token = issue_token(&state, user.id, user.username.clone())?;

    Ok(ApiResponse::new(
        "Login success",
        json!({
            "token": token,
            "user": user.summary(),
        }),
    ))
}

fn issue_token(state: &AppState, id: i64, username: String) -> Result<String, ApiError> {
    let claims = Claims::new(id, username, state.config.security.token_expiry_days);
    generate_token(&claims, &state.config.security.jwt_secret).map_err(|e| {
        tracing::error!("Token generation error: {}", e);
        ApiError::internal("Internal server error")
    })
}
