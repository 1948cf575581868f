//! Text-to-speech port

use async_trait::async_trait;
use calorie_domain::{
    CancellationReason, Language, Preferences, SpeechSpeed, SynthesizedAudio, VoiceGender,
};
use thiserror::Error;

/// Why a synthesis request produced no audio.
///
/// The underlying reason is preserved through the adapter boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesisError {
    #[error("Synthesis canceled ({reason}){}", detail_suffix(.detail))]
    Canceled {
        reason: CancellationReason,
        detail: Option<String>,
    },

    #[error("Synthesis request failed with status {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Synthesis returned no audio")]
    EmptyAudio,
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

/// Voice settings applied to a synthesis request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceProfile {
    pub language: Language,
    pub voice: VoiceGender,
    pub speed: SpeechSpeed,
}

impl VoiceProfile {
    pub fn from_preferences(preferences: &Preferences) -> Self {
        Self {
            language: preferences.language,
            voice: preferences.voice,
            speed: preferences.speed,
        }
    }
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self::from_preferences(&Preferences::default())
    }
}

/// Synthesis of a full utterance into one audio buffer
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        profile: &VoiceProfile,
    ) -> Result<SynthesizedAudio, SynthesisError>;
}
