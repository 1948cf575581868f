//! Preference value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Language used for recognition and synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }

    /// BCP-47 locale used by the speech services.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Spanish => "es-ES",
            Language::French => "fr-FR",
            Language::German => "de-DE",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    /// Accepts the display name or the locale, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::ALL
            .into_iter()
            .find(|l| {
                l.as_str().eq_ignore_ascii_case(needle) || l.locale().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::UnknownLanguage(s.to_string()))
    }
}

/// Voice gender selected for synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    #[default]
    Male,
    Female,
}

impl VoiceGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceGender::Male => "Male",
            VoiceGender::Female => "Female",
        }
    }
}

impl std::fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VoiceGender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(VoiceGender::Male),
            "female" | "f" => Ok(VoiceGender::Female),
            _ => Err(DomainError::UnknownVoice(s.to_string())),
        }
    }
}

/// Speech speed multiplier, validated to `0.5..=2.0`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct SpeechSpeed(f32);

impl SpeechSpeed {
    pub const MIN: f32 = 0.5;
    pub const MAX: f32 = 2.0;

    pub fn new(value: f32) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidSpeed(value))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Relative rate as a signed percentage, e.g. `1.25` -> `+25%`.
    pub fn as_percent_delta(&self) -> String {
        let delta = ((self.0 - 1.0) * 100.0).round() as i32;
        if delta >= 0 {
            format!("+{}%", delta)
        } else {
            format!("{}%", delta)
        }
    }
}

impl Default for SpeechSpeed {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f32> for SpeechSpeed {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpeechSpeed> for f32 {
    fn from(speed: SpeechSpeed) -> Self {
        speed.0
    }
}

impl std::fmt::Display for SpeechSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}x", self.0)
    }
}

/// Console palette derived from the dark-mode preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// The user's preference set (Value Object)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Display name substituted into responses
    pub display_name: Option<String>,
    pub language: Language,
    pub dark_mode: bool,
    pub voice: VoiceGender,
    pub speed: SpeechSpeed,
}

impl Preferences {
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.display_name = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    pub fn with_voice(mut self, voice: VoiceGender) -> Self {
        self.voice = voice;
        self
    }

    pub fn with_speed(mut self, speed: SpeechSpeed) -> Self {
        self.speed = speed;
        self
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse_by_name_and_locale() {
        assert_eq!("spanish".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("de-DE".parse::<Language>().unwrap(), Language::German);
        assert_eq!(" French ".parse::<Language>().unwrap(), Language::French);
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(DomainError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_voice_parse() {
        assert_eq!("Female".parse::<VoiceGender>().unwrap(), VoiceGender::Female);
        assert_eq!("m".parse::<VoiceGender>().unwrap(), VoiceGender::Male);
        assert!("robot".parse::<VoiceGender>().is_err());
    }

    #[test]
    fn test_speed_bounds() {
        assert!(SpeechSpeed::new(0.5).is_ok());
        assert!(SpeechSpeed::new(2.0).is_ok());
        assert_eq!(SpeechSpeed::new(0.4), Err(DomainError::InvalidSpeed(0.4)));
        assert!(SpeechSpeed::new(2.5).is_err());
    }

    #[test]
    fn test_speed_percent_delta() {
        assert_eq!(SpeechSpeed::default().as_percent_delta(), "+0%");
        assert_eq!(SpeechSpeed::new(1.5).unwrap().as_percent_delta(), "+50%");
        assert_eq!(SpeechSpeed::new(0.5).unwrap().as_percent_delta(), "-50%");
    }

    #[test]
    fn test_speed_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<SpeechSpeed>("1.5").is_ok());
        assert!(serde_json::from_str::<SpeechSpeed>("9.0").is_err());
    }

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.display_name, None);
        assert_eq!(prefs.language, Language::English);
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.voice, VoiceGender::Male);
        assert_eq!(prefs.speed.value(), 1.0);
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_blank_display_name_is_none() {
        let prefs = Preferences::default().with_display_name("   ");
        assert_eq!(prefs.display_name, None);
    }
}
