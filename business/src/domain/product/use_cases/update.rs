use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::image::model::UploadedImage;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};

pub struct UpdateProductParams {
    pub id: Uuid,
    pub changes: ProductChanges,
    pub images: Vec<UploadedImage>,
    /// Stored filenames the client wants to keep alongside the uploads.
    pub retained_images: Vec<String>,
    /// Position of the featured image within the reconciled image list.
    pub thumbnail_index: Option<i64>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
