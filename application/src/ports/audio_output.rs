//! Audio output port

use calorie_domain::SynthesizedAudio;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioOutputError {
    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Could not decode audio: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for synthesized audio (speaker, file, ...).
///
/// Blocks until the audio has been fully delivered.
pub trait AudioPlayerPort: Send + Sync {
    /// Short description shown to the user, e.g. "default speaker"
    fn describe(&self) -> String;

    fn play(&self, audio: &SynthesizedAudio) -> Result<(), AudioOutputError>;
}
