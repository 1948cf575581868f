//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod audio_output;
pub mod conversation_logger;
pub mod generative_gateway;
pub mod image_upload;
pub mod progress;
pub mod speech_recognizer;
pub mod speech_synthesizer;
