//! Image upload port

use calorie_domain::ImageMime;
use std::path::Path;
use thiserror::Error;

/// A user-supplied image handle
pub trait ImageUpload: Send + Sync {
    /// Name shown back to the user (e.g. the file name)
    fn name(&self) -> &str;

    fn mime_type(&self) -> ImageMime;

    fn read_bytes(&self) -> std::io::Result<Vec<u8>>;
}

/// The image at a path could not be used.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ImageOpenError(pub String);

/// Turns a user-given path into an [`ImageUpload`].
pub trait ImageSource: Send + Sync {
    fn open(&self, path: &Path) -> Result<Box<dyn ImageUpload>, ImageOpenError>;
}
