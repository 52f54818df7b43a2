use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::errors::AuthError;
use business::domain::user::services::{IssuedToken, TokenService};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// HS256 bearer tokens whose subject is the user id.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: UserId) -> Result<IssuedToken, AuthError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("Token signing failed: {}", e);
                AuthError::TokenIssue
            })?;

        Ok(IssuedToken { token, expires_at })
    }

    fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            AuthError::InvalidToken
        })?;

        data.claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::InvalidToken)
    }
}
