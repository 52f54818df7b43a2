#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image.invalid_filename")]
    InvalidFilename,
    #[error("image.not_found")]
    NotFound,
    #[error("image.storage_failed")]
    StorageFailed,
}
