//! Local audio devices and WAV handling
//!
//! Microphone capture feeds the speech recognizer; speaker playback and
//! the WAV file sink deliver synthesized answers.

mod capture;
mod dsp;
mod file_sink;
mod playback;
pub mod wav;

pub use capture::{CaptureError, CpalMicrophone, SilenceDetector, UtteranceSource};
pub use file_sink::WavFileSink;
pub use playback::{CpalSpeaker, FanOutPlayer};

/// Sample rate the speech service expects for recognition audio.
pub const CAPTURE_SAMPLE_RATE: u32 = 16_000;
