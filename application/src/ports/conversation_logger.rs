//! Port for the structured conversation transcript.
//!
//! Every turn leaves a trail of [`ConversationEvent`]s: the question, the
//! model's answer, the meal analysis when a photo was attached, and the
//! outcome of dictation and speech synthesis. `tracing` stays the place for
//! diagnostics; this port is the machine-readable record (JSONL on disk).

use serde_json::Value;

/// Event type names written to the transcript.
pub mod kinds {
    pub const USER_TURN: &str = "user_turn";
    pub const BOT_RESPONSE: &str = "bot_response";
    pub const MEAL_ANALYSIS: &str = "meal_analysis";
    pub const RECOGNITION: &str = "recognition";
    pub const SYNTHESIS: &str = "synthesis";
}

/// One transcript record.
pub struct ConversationEvent {
    /// One of [`kinds`]
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn user_turn(payload: Value) -> Self {
        Self::new(kinds::USER_TURN, payload)
    }

    pub fn bot_response(payload: Value) -> Self {
        Self::new(kinds::BOT_RESPONSE, payload)
    }

    pub fn meal_analysis(payload: Value) -> Self {
        Self::new(kinds::MEAL_ANALYSIS, payload)
    }

    pub fn recognition(payload: Value) -> Self {
        Self::new(kinds::RECOGNITION, payload)
    }

    pub fn synthesis(payload: Value) -> Self {
        Self::new(kinds::SYNTHESIS, payload)
    }
}

/// Sink for transcript records. Writing never fails the turn.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Used when no transcript file is configured.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
