use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::image_files::{discard_images, store_uploads};
use crate::domain::errors::RepositoryError;
use crate::domain::image::services::ImageStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::images::select_thumbnail;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.fields.sku));

        params.fields.validate()?;

        // Reject before anything touches the disk
        let thumbnail_index = params
            .thumbnail_index
            .filter(|index| {
                usize::try_from(*index).is_ok_and(|index| index < params.images.len())
            })
            .ok_or(ProductError::InvalidThumbnailIndex)?;

        let images = store_uploads(
            self.image_store.as_ref(),
            &params.images,
            self.logger.as_ref(),
        )
        .await?;

        let product = match select_thumbnail(&images, thumbnail_index)
            .and_then(|thumbnail| Product::new(params.fields, images.clone(), thumbnail))
        {
            Ok(product) => product,
            Err(e) => {
                discard_images(self.image_store.as_ref(), &images, self.logger.as_ref()).await;
                return Err(e);
            }
        };

        if let Err(e) = self.repository.create(&product).await {
            discard_images(self.image_store.as_ref(), &images, self.logger.as_ref()).await;
            return Err(match e {
                RepositoryError::Duplicated => ProductError::SkuAlreadyExists,
                other => ProductError::Repository(other),
            });
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
