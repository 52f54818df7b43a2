use async_trait::async_trait;

use crate::domain::image::model::UploadedImage;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFields};

pub struct CreateProductParams {
    pub fields: ProductFields,
    pub images: Vec<UploadedImage>,
    /// Position of the featured image within `images`.
    pub thumbnail_index: Option<i64>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
