use std::env;
use std::path::PathBuf;

const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Where product images are written
///
/// Environment variables:
/// - UPLOAD_DIR: Upload directory, created at startup (default: "uploads")
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let upload_dir =
            env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());
        Self {
            upload_dir: PathBuf::from(upload_dir),
        }
    }
}
