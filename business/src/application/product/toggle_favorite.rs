use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::toggle_favorite::{
    ToggleFavoriteParams, ToggleFavoriteUseCase,
};
use crate::domain::user::repository::UserRepository;

pub struct ToggleFavoriteUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<Vec<Uuid>, ProductError> {
        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let mut user = self
            .user_repository
            .get_by_id(params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::UserNotFound,
                other => ProductError::Repository(other),
            })?;

        let now_favorite = user.toggle_favorite(params.product_id);
        self.user_repository
            .update_favorites(user.id, &user.favorite_products)
            .await?;

        self.logger.info(&format!(
            "Product {} {} favorites of user {}",
            params.product_id,
            if now_favorite { "added to" } else { "removed from" },
            user.id
        ));
        Ok(user.favorite_products)
    }
}
