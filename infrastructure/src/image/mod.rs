//! Image files attached from the local filesystem.

mod local_file;

pub use local_file::{LocalImageError, LocalImageFile, LocalImageSource};
