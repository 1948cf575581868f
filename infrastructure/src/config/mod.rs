//! Configuration loading for calorie-doctor
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources (see [`ConfigLoader::load`] for the priority order), plus the
//! service credentials read from the environment.

mod credentials;
mod file_config;
mod loader;

pub use credentials::{
    AZURE_SPEECH_SERVICE_REGION, AZURE_SPEECH_SUBSCRIPTION_KEY, CredentialError, Credentials,
    GOOGLE_API_KEY,
};
pub use file_config::{
    ConfigValidationError, FileAudioConfig, FileConfig, FileConversationConfig,
    FileGeminiConfig, FileLoggingConfig, FileOutputConfig, FilePreferencesConfig,
    FileReplConfig, FileSpeechConfig, FileWidgetConfig,
};
pub use loader::ConfigLoader;
