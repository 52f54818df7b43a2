use anyhow::Context;
use chrono::Duration;
use std::env;

const DEFAULT_TOKEN_TTL_HOURS: i64 = 3;

/// Bearer token settings
///
/// Environment variables:
/// - JWT_SECRET: HMAC signing secret (required)
/// - TOKEN_TTL_HOURS: Token lifetime in hours (default: 3)
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        Self::from_values(jwt_secret, env::var("TOKEN_TTL_HOURS").ok())
    }

    fn from_values(jwt_secret: String, ttl_hours: Option<String>) -> anyhow::Result<Self> {
        if jwt_secret.trim().is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        let hours = match ttl_hours {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .context("TOKEN_TTL_HOURS must be a positive integer")?,
            None => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            jwt_secret,
            token_ttl: Duration::hours(hours),
        })
    }
}
