use async_trait::async_trait;

use crate::domain::image::errors::ImageError;
use crate::domain::image::model::StoredImage;

pub struct GetImageParams {
    pub filename: String,
}

#[async_trait]
pub trait GetImageUseCase: Send + Sync {
    async fn execute(&self, params: GetImageParams) -> Result<StoredImage, ImageError>;
}
