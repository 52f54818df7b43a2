use super::errors::ImageError;

/// Name of a file directly inside the upload directory.
///
/// Only a single plain path component is accepted, so a filename can never
/// address anything outside that directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFilename(String);

impl ImageFilename {
    pub fn parse(raw: &str) -> Result<Self, ImageError> {
        let is_plain = !raw.is_empty()
            && raw != "."
            && raw != ".."
            && !raw.contains(['/', '\\', '\0'])
            && !raw.contains("..");

        if !is_plain {
            return Err(ImageError::InvalidFilename);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn extension(&self) -> Option<String> {
        self.0
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// Media type served for this file, derived from its extension.
    pub fn content_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("svg") => "image/svg+xml",
            Some("bmp") => "image/bmp",
            Some("avif") => "image/avif",
            _ => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ImageFilename {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A file received in a multipart request, not yet written to the store.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub original_name: Option<String>,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct StoredImage {
    pub data: Vec<u8>,
    pub content_type: String,
}
