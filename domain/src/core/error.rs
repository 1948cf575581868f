//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Speech speed {0} is outside the supported range 0.5..=2.0")]
    InvalidSpeed(f32),

    #[error("Unsupported image type: {0} (expected jpg, jpeg or png)")]
    UnsupportedImageType(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown voice: {0}")]
    UnknownVoice(String),
}
