use calorie_application::{ImageOpenError, ImageSource, ImageUpload};
use calorie_domain::{DomainError, ImageMime};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalImageError {
    #[error("Image not found: {0}")]
    NotFound(PathBuf),

    #[error("{path}: {source}")]
    Unsupported {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// A jpg/jpeg/png file picked by the user.
///
/// Only the extension is checked when opening; the bytes are read when
/// the image is sent.
#[derive(Debug, Clone)]
pub struct LocalImageFile {
    path: PathBuf,
    name: String,
    mime: ImageMime,
}

impl LocalImageFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LocalImageError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LocalImageError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime = ImageMime::from_extension(&extension).map_err(|source| {
            LocalImageError::Unsupported {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            mime,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageUpload for LocalImageFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> ImageMime {
        self.mime
    }

    fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// [`ImageSource`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalImageSource;

impl ImageSource for LocalImageSource {
    fn open(&self, path: &Path) -> Result<Box<dyn ImageUpload>, ImageOpenError> {
        LocalImageFile::open(path)
            .map(|file| Box::new(file) as Box<dyn ImageUpload>)
            .map_err(|e| ImageOpenError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_application::extract_image_parts;

    #[test]
    fn test_open_png_and_extract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lunch.PNG");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let image = LocalImageFile::open(&path).unwrap();
        assert_eq!(image.name(), "lunch.PNG");
        assert_eq!(image.mime_type(), ImageMime::Png);

        let parts = extract_image_parts(Some(&image as &dyn ImageUpload)).unwrap().unwrap();
        let payload = parts.first().unwrap();
        assert_eq!(payload.mime_type, ImageMime::Png);
        assert_eq!(payload.data, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_jpeg_extensions_map_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.jpg", "b.jpeg"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"jpeg").unwrap();
            assert_eq!(
                LocalImageFile::open(&path).unwrap().mime_type(),
                ImageMime::Jpeg
            );
        }
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        assert!(matches!(
            LocalImageFile::open(&path),
            Err(LocalImageError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        assert!(matches!(
            LocalImageFile::open("/definitely/not/here.png"),
            Err(LocalImageError::NotFound(_))
        ));
    }

    #[test]
    fn test_image_source_reports_rejection() {
        let err = LocalImageSource
            .open(Path::new("/definitely/not/here.png"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Image not found"));
    }
}
