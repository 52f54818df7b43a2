use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::product::image_files::{discard_images, store_uploads};
use crate::domain::errors::RepositoryError;
use crate::domain::image::services::ImageStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::images::{reconcile_images, resolve_thumbnail};
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let current = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let fields = current.merge_changes(params.changes)?;

        let uploaded = store_uploads(
            self.image_store.as_ref(),
            &params.images,
            self.logger.as_ref(),
        )
        .await?;

        let reconciliation =
            reconcile_images(&current.images, &params.retained_images, &uploaded);

        let thumbnail = match resolve_thumbnail(
            &reconciliation.images,
            params.thumbnail_index,
            &current.thumbnail,
        ) {
            Ok(thumbnail) => thumbnail,
            Err(e) => {
                discard_images(self.image_store.as_ref(), &uploaded, self.logger.as_ref()).await;
                return Err(e);
            }
        };

        let updated = Product::from_repository(
            current.id,
            fields.name,
            fields.sku,
            fields.quantity,
            fields.description,
            fields.price,
            reconciliation.images,
            thumbnail,
            current.created_at,
            Utc::now(),
        );

        if let Err(e) = self.repository.update(&updated).await {
            discard_images(self.image_store.as_ref(), &uploaded, self.logger.as_ref()).await;
            return Err(match e {
                RepositoryError::NotFound => ProductError::UpdateFailed,
                RepositoryError::Duplicated => ProductError::SkuAlreadyExists,
                other => ProductError::Repository(other),
            });
        }

        // Only unreferenced files are removed, and only once the new list is stored
        if !reconciliation.to_delete.is_empty() {
            self.logger.debug(&format!(
                "Removing {} replaced images of product {}",
                reconciliation.to_delete.len(),
                updated.id
            ));
            discard_images(
                self.image_store.as_ref(),
                &reconciliation.to_delete,
                self.logger.as_ref(),
            )
            .await;
        }

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
