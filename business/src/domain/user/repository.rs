use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// Inserts a new account. Fails with `Duplicated` when the email is taken.
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;
    async fn update_favorites(
        &self,
        id: UserId,
        favorite_products: &[Uuid],
    ) -> Result<(), RepositoryError>;
}
