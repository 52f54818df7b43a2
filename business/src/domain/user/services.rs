use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

/// Service port for one-way salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Returns `false` for a mismatch and for an unreadable stored hash alike.
    async fn verify(&self, password: &str, password_hash: &str) -> bool;

    /// Spends one verification of the same cost against a fixed hash that
    /// matches no password. Used when no stored hash exists, so a lookup miss
    /// takes as long as a wrong password.
    async fn verify_decoy(&self, password: &str);
}

/// A signed bearer token and the instant it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service port for issuing and verifying signed, time-limited bearer tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: UserId) -> Result<IssuedToken, AuthError>;

    /// Resolves a token to its subject. Bad signatures and expired tokens
    /// both yield `AuthError::InvalidToken`.
    fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}
