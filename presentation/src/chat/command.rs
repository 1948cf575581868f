//! Slash commands understood by the REPL

use calorie_domain::{DomainError, Language, Preferences, SpeechSpeed, VoiceGender};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown setting '{0}' (expected name, language, theme, voice or speed)")]
    UnknownSetting(String),

    #[error("Speed must be a number, got '{0}'")]
    NotANumber(String),

    #[error("Theme must be 'light' or 'dark', got '{0}'")]
    UnknownTheme(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Name,
    Language,
    Theme,
    Voice,
    Speed,
}

impl std::str::FromStr for SettingKey {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SettingKey::Name),
            "language" | "lang" => Ok(SettingKey::Language),
            "theme" => Ok(SettingKey::Theme),
            "voice" => Ok(SettingKey::Voice),
            "speed" => Ok(SettingKey::Speed),
            _ => Err(CommandError::UnknownSetting(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    AttachImage(PathBuf),
    ClearImage,
    Listen,
    Settings,
    Set(SettingKey, String),
    Overview,
    History,
    Widget,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a line starting with `/`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/listen" | "/l" => Ok(ReplCommand::Listen),
            "/settings" => Ok(ReplCommand::Settings),
            "/overview" => Ok(ReplCommand::Overview),
            "/history" => Ok(ReplCommand::History),
            "/widget" => Ok(ReplCommand::Widget),
            "/image" => match rest {
                "" => Err(CommandError::Usage("/image <path> | /image clear")),
                "clear" => Ok(ReplCommand::ClearImage),
                path => Ok(ReplCommand::AttachImage(PathBuf::from(path))),
            },
            "/set" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(k, v)| (k, v.trim()))
                    .ok_or(CommandError::Usage("/set <name|language|theme|voice|speed> <value>"))?;
                Ok(ReplCommand::Set(key.parse()?, value.to_string()))
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Build the preference set that results from one `/set`.
///
/// The returned value replaces the session's preferences as a whole.
pub fn apply_setting(
    current: &Preferences,
    key: SettingKey,
    value: &str,
) -> Result<Preferences, CommandError> {
    let next = current.clone();
    Ok(match key {
        SettingKey::Name => next.with_display_name(value),
        SettingKey::Language => next.with_language(value.parse::<Language>()?),
        SettingKey::Voice => next.with_voice(value.parse::<VoiceGender>()?),
        SettingKey::Speed => {
            let speed: f32 = value
                .parse()
                .map_err(|_| CommandError::NotANumber(value.to_string()))?;
            next.with_speed(SpeechSpeed::new(speed)?)
        }
        SettingKey::Theme => match value.to_ascii_lowercase().as_str() {
            "dark" => next.with_dark_mode(true),
            "light" => next.with_dark_mode(false),
            _ => return Err(CommandError::UnknownTheme(value.to_string())),
        },
    })
}
