//! Image payload extraction from an upload handle.

use crate::ports::image_upload::ImageUpload;
use calorie_domain::{ImageParts, ImagePayload};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ImageUploadError {
    #[error("Could not read image '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Turn an optional upload into the image parts sent with a generation call.
///
/// No upload yields `Ok(None)`; one upload yields a one-element
/// [`ImageParts`] holding the upload's raw bytes.
pub fn extract_image_parts(
    upload: Option<&dyn ImageUpload>,
) -> Result<Option<ImageParts>, ImageUploadError> {
    let Some(upload) = upload else {
        return Ok(None);
    };

    let data = upload.read_bytes().map_err(|source| ImageUploadError::Read {
        name: upload.name().to_string(),
        source,
    })?;

    debug!(
        "Extracted image '{}' ({}, {} bytes)",
        upload.name(),
        upload.mime_type(),
        data.len()
    );

    Ok(Some(ImageParts::single(ImagePayload::new(
        upload.mime_type(),
        data,
    ))))
}
