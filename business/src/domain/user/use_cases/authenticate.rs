use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::model::User;

pub struct AuthenticateParams {
    /// Raw value of the `Authorization` header, if the request carried one.
    pub authorization: Option<String>,
}

#[async_trait]
pub trait AuthenticateUseCase: Send + Sync {
    async fn execute(&self, params: AuthenticateParams) -> Result<User, AuthError>;
}
