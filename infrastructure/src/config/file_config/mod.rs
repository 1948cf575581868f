//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audio;
mod conversation;
mod gemini;
mod logging;
mod output;
mod preferences;
mod repl;
mod speech;
mod widget;

pub use audio::FileAudioConfig;
pub use conversation::FileConversationConfig;
pub use gemini::FileGeminiConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use preferences::FilePreferencesConfig;
pub use repl::FileReplConfig;
pub use speech::FileSpeechConfig;
pub use widget::FileWidgetConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("gemini.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("preferences.speed {0} is outside 0.5..=2.0")]
    InvalidSpeed(f32),

    #[error("preferences.language: unknown value '{0}'")]
    UnknownLanguage(String),

    #[error("preferences.voice: unknown value '{0}'")]
    UnknownVoice(String),

    #[error("audio.max_record_seconds cannot be 0")]
    InvalidRecordDuration,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generative model settings
    pub gemini: FileGeminiConfig,
    /// Speech service endpoints and output format
    pub speech: FileSpeechConfig,
    /// Context window and synthesis switch
    pub conversation: FileConversationConfig,
    /// Microphone and speaker settings
    pub audio: FileAudioConfig,
    /// Preference defaults for a new session
    pub preferences: FilePreferencesConfig,
    /// Embedded chat widget identifiers
    pub widget: FileWidgetConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript and diagnostic log locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.gemini.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if !self.gemini.model.is_valid() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.audio.max_record_seconds == 0 {
            issues.push(ConfigValidationError::InvalidRecordDuration);
        }
        if let Err(e) = self.preferences.to_preferences() {
            issues.push(e);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_domain::GenerativeModel;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = FileConfig::default();
        config.gemini.timeout_seconds = 0;
        config.gemini.model = GenerativeModel::Custom(String::new());
        config.preferences.language = "Klingon".to_string();

        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::InvalidTimeout,
                ConfigValidationError::EmptyModelName,
                ConfigValidationError::UnknownLanguage("Klingon".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-flash"
timeout_seconds = 30

[speech]
output_format = "riff-16khz-16bit-mono-pcm"

[conversation]
max_context_entries = 6
speak_responses = false

[preferences]
name = "Sam"
language = "French"
voice = "Female"
speed = 1.5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, GenerativeModel::Gemini25Flash);
        assert_eq!(config.gemini.timeout_seconds, 30);
        assert_eq!(
            config.speech.output_format,
            calorie_domain::AudioFormat::Riff16Khz16BitMonoPcm
        );
        assert_eq!(config.conversation.max_context_entries, 6);
        assert!(!config.conversation.speak_responses);

        let prefs = config.preferences.to_preferences().unwrap();
        assert_eq!(prefs.display_name.as_deref(), Some("Sam"));
        assert_eq!(prefs.language, calorie_domain::Language::French);
        assert!(config.validate().is_empty());
    }
}
