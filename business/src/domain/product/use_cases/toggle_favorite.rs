use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::UserId;

pub struct ToggleFavoriteParams {
    pub product_id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    /// Returns the user's favorite list after the toggle.
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<Vec<Uuid>, ProductError>;
}
