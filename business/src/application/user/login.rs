use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenService};
use crate::domain::user::use_cases::login::{LoginParams, LoginResult, LoginUseCase};
use crate::domain::user::value_objects::Email;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_service: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<LoginResult, AuthError> {
        let email = params.email.trim();
        if email.is_empty() || params.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::parse(email)?;

        let Some(user) = self.repository.find_by_email(email.as_str()).await? else {
            self.password_hasher.verify_decoy(&params.password).await;
            self.logger
                .debug(&format!("Login failed, unknown email: {}", email));
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(&params.password, &user.password_hash)
            .await
        {
            self.logger
                .debug(&format!("Login failed, wrong password for user: {}", user.id));
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.issue(user.id)?;

        self.logger
            .info(&format!("User logged in: {}", user.id));
        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }
}
