use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::TokenService;
use crate::domain::user::use_cases::authenticate::{AuthenticateParams, AuthenticateUseCase};

const BEARER_PREFIX: &str = "Bearer ";

pub struct AuthenticateUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub token_service: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AuthenticateUseCase for AuthenticateUseCaseImpl {
    async fn execute(&self, params: AuthenticateParams) -> Result<User, AuthError> {
        let header = params
            .authorization
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidToken)?;

        let user_id = self.token_service.verify(token)?;

        // A valid signature is not enough once the account is gone
        let user = self
            .repository
            .get_by_id(user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger
                        .warn(&format!("Token subject no longer exists: {}", user_id));
                    AuthError::InvalidToken
                }
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }
}
