use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{verify_token, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller context extracted from a verified bearer token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
        }
    }
}

/// Bearer-token gate in front of every protected route: resolve the token
/// to a caller identity and attach it to the request, or reject with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;

    let claims = verify_token(&token, &state.config.security.jwt_secret)
        .map_err(|_| ApiError::unauthorized("Invalid token"))?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("No token provided"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid token format"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        _ => Err(ApiError::unauthorized("Invalid token format")),
    }
}
