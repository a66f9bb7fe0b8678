//! Conversion of uploaded image files into embeddable data URLs.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::FormError;

/// MIME types accepted for hero and offer images.
const ACCEPTED_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// An uploaded image, fully read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    mime: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wrap raw image bytes of the given MIME type.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnsupportedImage` for anything but PNG or JPEG and
    /// `FormError::EmptyImage` for a zero-byte upload.
    pub fn from_bytes(mime: &str, bytes: Vec<u8>) -> Result<Self, FormError> {
        let mime = mime.trim().to_ascii_lowercase();
        if !ACCEPTED_TYPES.contains(&mime.as_str()) {
            return Err(FormError::UnsupportedImage { mime });
        }
        if bytes.is_empty() {
            return Err(FormError::EmptyImage);
        }
        Ok(Self { mime, bytes })
    }

    /// Read an image file, guessing its type from the extension.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnsupportedImage` if the extension is not a PNG or
    /// JPEG one, `FormError::ReadImage` if the file cannot be read, and
    /// `FormError::EmptyImage` if it is empty.
    pub fn from_path(path: &Path) -> Result<Self, FormError> {
        let mime = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream");
        if !ACCEPTED_TYPES.contains(&mime) {
            return Err(FormError::UnsupportedImage {
                mime: mime.to_owned(),
            });
        }
        let bytes = std::fs::read(path).map_err(|source| FormError::ReadImage {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), mime, size = bytes.len(), "Read image upload");
        Self::from_bytes(mime, bytes)
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Encode as a `data:` URL usable directly as an `<img>` source.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, BASE64.encode(&self.bytes))
    }
}
