//! Default preferences from TOML (`[preferences]` section)

use super::ConfigValidationError;
use calorie_domain::{Language, Preferences, SpeechSpeed, VoiceGender};
use serde::{Deserialize, Serialize};

/// Raw preference defaults from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePreferencesConfig {
    pub name: Option<String>,
    pub language: String,
    pub dark_mode: bool,
    pub voice: String,
    pub speed: f32,
}

impl Default for FilePreferencesConfig {
    fn default() -> Self {
        let defaults = Preferences::default();
        Self {
            name: None,
            language: defaults.language.as_str().to_string(),
            dark_mode: defaults.dark_mode,
            voice: defaults.voice.as_str().to_string(),
            speed: defaults.speed.value(),
        }
    }
}

impl FilePreferencesConfig {
    /// Parse into a domain preference set.
    pub fn to_preferences(&self) -> Result<Preferences, ConfigValidationError> {
        let language: Language = self
            .language
            .parse()
            .map_err(|_| ConfigValidationError::UnknownLanguage(self.language.clone()))?;
        let voice: VoiceGender = self
            .voice
            .parse()
            .map_err(|_| ConfigValidationError::UnknownVoice(self.voice.clone()))?;
        let speed = SpeechSpeed::new(self.speed)
            .map_err(|_| ConfigValidationError::InvalidSpeed(self.speed))?;

        let mut prefs = Preferences::default()
            .with_language(language)
            .with_dark_mode(self.dark_mode)
            .with_voice(voice)
            .with_speed(speed);
        if let Some(name) = &self.name {
            prefs = prefs.with_display_name(name.clone());
        }
        Ok(prefs)
    }
}
