use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::{PublicUser, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::user::value_objects::{Email, validate_password};

pub struct RegisterUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<PublicUser, AuthError> {
        let name = params.name.trim();
        let email = params.email.trim();
        if name.is_empty() || email.is_empty() || params.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::parse(email)?;
        validate_password(&params.password)?;

        if self.repository.find_by_email(email.as_str()).await?.is_some() {
            self.logger
                .debug(&format!("Registration rejected, email in use: {}", email));
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = self.password_hasher.hash(&params.password).await?;
        let user = User::new(name.to_string(), email, password_hash);

        // A concurrent registration can still win the race to the unique index
        self.repository.create(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => AuthError::EmailAlreadyExists,
            other => AuthError::Repository(other),
        })?;

        self.logger
            .info(&format!("User registered with id: {}", user.id));
        Ok(user.into())
    }
}
