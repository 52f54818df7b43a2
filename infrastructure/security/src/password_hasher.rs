use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

use business::domain::user::errors::AuthError;
use business::domain::user::services::PasswordHasher;

/// Argon2id with the crate's default cost parameters.
pub struct Argon2PasswordHasher;

// Default parameters, zero digest: parses, costs a full verification, matches nothing.
const DECOY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            AuthError::PasswordHash
        })
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash could not be parsed");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

// Both calls run on the blocking pool.
#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|_| AuthError::PasswordHash)?
    }

    async fn verify(&self, password: &str, password_hash: &str) -> bool {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
            .await
            .unwrap_or(false)
    }

    async fn verify_decoy(&self, password: &str) {
        let password = password.to_owned();
        let _ = tokio::task::spawn_blocking(move || verify_password(&password, DECOY_HASH)).await;
    }
}
