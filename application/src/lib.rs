//! Application layer for calorie-doctor
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConversationParams;
pub use ports::{
    audio_output::{AudioOutputError, AudioPlayerPort},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    generative_gateway::{GatewayError, GenerationRequest, GenerativeGateway},
    image_upload::{ImageOpenError, ImageSource, ImageUpload},
    progress::{NoProgress, Stage, TurnProgressNotifier},
    speech_recognizer::SpeechRecognizerPort,
    speech_synthesizer::{SpeechSynthesizerPort, SynthesisError, VoiceProfile},
};
pub use use_cases::analyze_meal::{AnalyzeMealError, AnalyzeMealUseCase};
pub use use_cases::capture_speech::CaptureSpeechUseCase;
pub use use_cases::converse::{ConverseError, ConverseUseCase};
pub use use_cases::extract_image::{ImageUploadError, extract_image_parts};
pub use use_cases::run_turn::{RunTurnError, RunTurnUseCase, SpeechResult, TurnOutput};
