//! Domain layer for calorie-doctor
//!
//! This crate contains the core entities and value objects. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Conversation**: an append-only log of `User:`/`Bot:` entries, flattened
//!   through a bounded [`ContextWindow`] into the prompt for the next turn
//! - **Preferences**: display name, language, theme, voice and speed, always
//!   replaced as a whole
//! - **Session**: the explicit [`SessionContext`] passed to every use case

pub mod conversation;
pub mod core;
pub mod media;
pub mod preferences;
pub mod prompt;
pub mod session;
pub mod speech;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    entities::{ConversationEntry, ConversationLog, Role},
    window::ContextWindow,
};
pub use core::{error::DomainError, model::GenerativeModel};
pub use media::{
    audio::{AudioFormat, SynthesizedAudio},
    image::{ImageMime, ImageParts, ImagePayload},
};
pub use preferences::{
    entities::{Language, Preferences, SpeechSpeed, Theme, VoiceGender},
    personalize::{NAME_PLACEHOLDER, personalize},
};
pub use prompt::PromptTemplate;
pub use session::SessionContext;
pub use speech::{CancellationReason, RecognitionOutcome, RecognizedText};
