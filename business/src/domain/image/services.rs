use async_trait::async_trait;

use super::errors::ImageError;
use super::model::{ImageFilename, StoredImage, UploadedImage};

/// Service port for the directory holding uploaded product images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Writes the upload under a freshly generated unique filename and returns it.
    async fn save(&self, image: &UploadedImage) -> Result<ImageFilename, ImageError>;

    async fn load(&self, filename: &ImageFilename) -> Result<StoredImage, ImageError>;

    /// Removes the file. A file that is already gone is not an error.
    async fn delete(&self, filename: &ImageFilename) -> Result<(), ImageError>;
}
