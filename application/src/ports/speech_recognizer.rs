//! Speech-to-text port

use async_trait::async_trait;
use calorie_domain::{Language, RecognitionOutcome};

/// Single-utterance speech recognition from the default input device.
///
/// Infallible at this boundary: capture and transport failures are reported
/// as [`RecognitionOutcome::Canceled`] with the failure detail.
#[async_trait]
pub trait SpeechRecognizerPort: Send + Sync {
    async fn recognize_once(&self, language: Language) -> RecognitionOutcome;
}
