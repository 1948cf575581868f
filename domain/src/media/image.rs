//! Image payload value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Raster formats accepted for meal photos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    /// File extensions the upload surface accepts.
    pub const EXTENSIONS: [&'static str; 3] = ["jpg", "jpeg", "png"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }

    pub fn from_extension(ext: &str) -> Result<Self, DomainError> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageMime::Jpeg),
            "png" => Ok(ImageMime::Png),
            other => Err(DomainError::UnsupportedImageType(other.to_string())),
        }
    }

    pub fn from_mime(mime: &str) -> Result<Self, DomainError> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(ImageMime::Jpeg),
            "image/png" => Ok(ImageMime::Png),
            other => Err(DomainError::UnsupportedImageType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ImageMime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A (mime-type, raw bytes) pair for one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: ImageMime,
    pub data: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: ImageMime, data: Vec<u8>) -> Self {
        Self { mime_type, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Images attached to a generation call.
///
/// Constructed from a single upload; only the first image is ever sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageParts(Vec<ImagePayload>);

impl ImageParts {
    pub fn single(payload: ImagePayload) -> Self {
        Self(vec![payload])
    }

    pub fn first(&self) -> Option<&ImagePayload> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ImagePayload] {
        &self.0
    }
}
