use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod password;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(id: i64, username: String, expiry_days: i64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::days(expiry_days)).timestamp();

        Self {
            id,
            username,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Token generation failed: {0}")]
    TokenGeneration(String),

    /// Expired, malformed and bad-signature tokens are deliberately
    /// indistinguishable to the caller.
    #[error("Invalid token")]
    InvalidToken,
}

pub fn generate_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| JwtError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips() {
        let claims = Claims::new(42, "alice".to_string(), 7);
        let token = generate_token(&claims, "secret").unwrap();

        let decoded = verify_token(&token, "secret").unwrap();
        assert_eq!(decoded.id, 42);
        assert_eq!(decoded.username, "alice");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims::new(1, "alice".to_string(), 7);
        let token = generate_token(&claims, "secret").unwrap();

        assert!(matches!(
            verify_token(&token, "other"),
            Err(JwtError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims::new(1, "alice".to_string(), -1);
        let token = generate_token(&claims, "secret").unwrap();

        assert!(matches!(
            verify_token(&token, "secret"),
            Err(JwtError::InvalidToken)
        ));
    }
}
