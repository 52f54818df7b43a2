use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::UserId;

pub struct GetFavoriteProductsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetFavoriteProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetFavoriteProductsParams)
    -> Result<Vec<Uuid>, ProductError>;
}
