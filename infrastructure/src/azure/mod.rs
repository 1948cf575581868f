//! Azure Speech adapters
//!
//! Recognition uses the short-audio REST endpoint with one captured
//! utterance per request; synthesis posts SSML and receives a RIFF clip.

mod config;
pub mod recognizer;
pub mod ssml;
pub mod synthesizer;
mod types;

pub use config::AzureSpeechConfig;
pub use recognizer::AzureSpeechRecognizer;
pub use synthesizer::AzureSpeechSynthesizer;

/// Header carrying the subscription key on every request.
pub(crate) const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
