use crate::domain::image::model::{ImageFilename, UploadedImage};
use crate::domain::image::services::ImageStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;

/// Writes every upload to the store and returns the generated filenames in
/// upload order. If one write fails the files already written are removed.
pub(crate) async fn store_uploads(
    store: &dyn ImageStore,
    uploads: &[UploadedImage],
    logger: &dyn Logger,
) -> Result<Vec<String>, ProductError> {
    let mut filenames = Vec::with_capacity(uploads.len());
    for upload in uploads {
        match store.save(upload).await {
            Ok(filename) => filenames.push(filename.into_inner()),
            Err(e) => {
                logger.error(&format!("Failed to store uploaded image: {}", e));
                discard_images(store, &filenames, logger).await;
                return Err(e.into());
            }
        }
    }
    Ok(filenames)
}

/// Best-effort removal. Failures are logged and otherwise ignored.
pub(crate) async fn discard_images(
    store: &dyn ImageStore,
    filenames: &[String],
    logger: &dyn Logger,
) {
    for name in filenames {
        let filename = match ImageFilename::parse(name) {
            Ok(filename) => filename,
            Err(_) => {
                logger.warn(&format!(
                    "Skipping removal of invalid image filename: {}",
                    name
                ));
                continue;
            }
        };
        if let Err(e) = store.delete(&filename).await {
            logger.warn(&format!("Failed to remove image {}: {}", name, e));
        }
    }
}
