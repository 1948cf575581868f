//! Infrastructure layer for calorie-doctor
//!
//! Adapters behind the application ports: the Gemini gateway, Azure
//! speech recognition and synthesis, local audio devices, image files,
//! configuration loading and the JSONL conversation log.

pub mod audio;
pub mod azure;
pub mod config;
pub mod gemini;
pub mod image;
pub mod logging;

// Re-export commonly used types
pub use audio::{
    CaptureError, CpalMicrophone, CpalSpeaker, FanOutPlayer, UtteranceSource, WavFileSink,
};
pub use azure::{AzureSpeechConfig, AzureSpeechRecognizer, AzureSpeechSynthesizer};
pub use config::{
    ConfigLoader, ConfigValidationError, CredentialError, Credentials, FileConfig,
};
pub use gemini::{GeminiConfig, GeminiGateway};
pub use image::{LocalImageError, LocalImageFile, LocalImageSource};
pub use logging::JsonlConversationLogger;
