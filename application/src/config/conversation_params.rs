//! Conversation parameters: per-turn control.
//!
//! [`ConversationParams`] groups the static parameters that control a turn in
//! [`RunTurnUseCase`](crate::use_cases::run_turn::RunTurnUseCase). These are
//! application-layer concerns, not domain policy.

use calorie_domain::ContextWindow;
use serde::{Deserialize, Serialize};

/// Turn control parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversationParams {
    /// Which log entries are flattened into the next prompt.
    pub window: ContextWindow,
    /// Whether responses are synthesized to speech.
    pub synthesize: bool,
}

impl Default for ConversationParams {
    fn default() -> Self {
        Self {
            window: ContextWindow::default(),
            synthesize: true,
        }
    }
}

impl ConversationParams {
    // ==================== Builder Methods ====================

    pub fn with_window(mut self, window: ContextWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_synthesis(mut self, synthesize: bool) -> Self {
        self.synthesize = synthesize;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ConversationParams::default();
        assert!(params.synthesize);
        assert_eq!(params.window, ContextWindow::default());
    }

    #[test]
    fn test_builder_chain() {
        let params = ConversationParams::default()
            .with_window(ContextWindow::unbounded())
            .with_synthesis(false);
        assert!(!params.synthesize);
        assert_eq!(params.window.max_entries, None);
    }
}
