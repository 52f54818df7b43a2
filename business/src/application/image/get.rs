use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::image::errors::ImageError;
use crate::domain::image::model::{ImageFilename, StoredImage};
use crate::domain::image::services::ImageStore;
use crate::domain::image::use_cases::get::{GetImageParams, GetImageUseCase};
use crate::domain::logger::Logger;

pub struct GetImageUseCaseImpl {
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetImageUseCase for GetImageUseCaseImpl {
    async fn execute(&self, params: GetImageParams) -> Result<StoredImage, ImageError> {
        let filename = ImageFilename::parse(&params.filename).inspect_err(|_| {
            self.logger
                .warn(&format!("Rejected image filename: {:?}", params.filename));
        })?;

        self.image_store.load(&filename).await
    }
}
