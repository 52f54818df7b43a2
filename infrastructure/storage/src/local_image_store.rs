//! Filesystem adapter for the image store port.
//!
//! Every image lives directly inside one upload directory. Names handed to
//! this adapter have already been checked by `ImageFilename::parse`, so they
//! cannot point outside it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::image::errors::ImageError;
use business::domain::image::model::{ImageFilename, StoredImage, UploadedImage};
use business::domain::image::services::ImageStore;

const MAX_ORIGINAL_NAME_LEN: usize = 64;
const FALLBACK_NAME: &str = "image";

pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), ImageError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            tracing::error!("Cannot create upload directory {:?}: {}", self.root, e);
            ImageError::StorageFailed
        })
    }

    fn path_of(&self, filename: &ImageFilename) -> PathBuf {
        self.root.join(filename.as_str())
    }
}

/// Reduces a client supplied name to `[A-Za-z0-9._-]`, without leading dots
/// or `..` sequences.
fn sanitize_original_name(original: Option<&str>) -> String {
    let base = original
        .map(|name| name.rsplit(['/', '\\']).next().unwrap_or(name))
        .unwrap_or_default();

    let mut cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    while cleaned.contains("..") {
        cleaned = cleaned.replace("..", ".");
    }
    let cleaned = cleaned.trim_start_matches('.');

    let truncated: String = cleaned
        .chars()
        .rev()
        .take(MAX_ORIGINAL_NAME_LEN)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    if truncated.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        truncated
    }
}

fn generate_filename(original: Option<&str>) -> Result<ImageFilename, ImageError> {
    ImageFilename::parse(&format!(
        "{}-{}",
        Uuid::new_v4(),
        sanitize_original_name(original)
    ))
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, image: &UploadedImage) -> Result<ImageFilename, ImageError> {
        let filename = generate_filename(image.original_name.as_deref())?;
        self.ensure_root().await?;

        tokio::fs::write(self.path_of(&filename), &image.data)
            .await
            .map_err(|e| {
                tracing::error!("Failed to write image {}: {}", filename, e);
                ImageError::StorageFailed
            })?;

        tracing::debug!("Stored image {} ({} bytes)", filename, image.data.len());
        Ok(filename)
    }

    async fn load(&self, filename: &ImageFilename) -> Result<StoredImage, ImageError> {
        let data = tokio::fs::read(self.path_of(filename))
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ImageError::NotFound,
                _ => {
                    tracing::error!("Failed to read image {}: {}", filename, e);
                    ImageError::StorageFailed
                }
            })?;

        Ok(StoredImage {
            data,
            content_type: filename.content_type().to_string(),
        })
    }

    async fn delete(&self, filename: &ImageFilename) -> Result<(), ImageError> {
        match tokio::fs::remove_file(self.path_of(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::warn!("Failed to delete image {}: {}", filename, e);
                Err(ImageError::StorageFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn upload(name: &str, data: &[u8]) -> UploadedImage {
        UploadedImage {
            original_name: Some(name.to_string()),
            data: data.to_vec(),
        }
    }

    #[tokio::test]
    async fn should_save_and_load_image() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        let filename = store.save(&upload("mug.png", b"png-bytes")).await.unwrap();
        let loaded = store.load(&filename).await.unwrap();

        assert!(filename.as_str().ends_with("-mug.png"));
        assert_eq!(loaded.data, b"png-bytes");
        assert_eq!(loaded.content_type, "image/png");
    }

    #[tokio::test]
    async fn should_give_identical_uploads_distinct_names() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        let first = store.save(&upload("mug.jpg", b"a")).await.unwrap();
        let second = store.save(&upload("mug.jpg", b"b")).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn should_create_missing_upload_directory() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("nested").join("uploads"));

        let filename = store.save(&upload("a.jpg", b"x")).await.unwrap();

        assert!(store.root().join(filename.as_str()).exists());
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_file() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());
        let filename = ImageFilename::parse("missing.jpg").unwrap();

        let result = store.load(&filename).await;

        assert!(matches!(result, Err(ImageError::NotFound)));
    }

    #[tokio::test]
    async fn should_delete_file_and_tolerate_repeat() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());
        let filename = store.save(&upload("a.jpg", b"x")).await.unwrap();

        store.delete(&filename).await.unwrap();
        let again = store.delete(&filename).await;

        assert!(again.is_ok());
        assert!(!store.root().join(filename.as_str()).exists());
    }

    #[test]
    fn should_strip_path_components_from_original_name() {
        assert_eq!(sanitize_original_name(Some("../../etc/passwd")), "passwd");
        assert_eq!(sanitize_original_name(Some("C:\\photos\\mug.jpg")), "mug.jpg");
    }

    #[test]
    fn should_neutralise_dots_and_odd_characters() {
        assert_eq!(sanitize_original_name(Some("..hidden")), "hidden");
        assert_eq!(sanitize_original_name(Some("my photo (1).jpg")), "my_photo__1_.jpg");
        assert_eq!(sanitize_original_name(Some("a..b.png")), "a.b.png");
    }

    #[test]
    fn should_fall_back_when_nothing_usable_remains() {
        assert_eq!(sanitize_original_name(None), "image");
        assert_eq!(sanitize_original_name(Some("...")), "image");
    }

    #[test]
    fn should_keep_extension_when_truncating() {
        let long = format!("{}.webp", "x".repeat(200));

        let sanitized = sanitize_original_name(Some(&long));

        assert_eq!(sanitized.chars().count(), MAX_ORIGINAL_NAME_LEN);
        assert!(sanitized.ends_with(".webp"));
    }
}
