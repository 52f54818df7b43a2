use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::model::PublicUser;
use crate::domain::user::services::IssuedToken;

pub struct LoginParams {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub user: PublicUser,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<LoginResult, AuthError>;
}
