//! Conversation configuration from TOML (`[conversation]` section)

use calorie_application::ConversationParams;
use calorie_domain::ContextWindow;
use calorie_domain::conversation::window::{DEFAULT_MAX_CHARS, DEFAULT_MAX_ENTRIES};
use serde::{Deserialize, Serialize};

/// Raw conversation configuration from TOML
///
/// A limit of `0` disables that limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversationConfig {
    /// Maximum log entries flattened into the next prompt
    pub max_context_entries: usize,
    /// Maximum characters of flattened context
    pub max_context_chars: usize,
    /// Synthesize every answer to speech
    pub speak_responses: bool,
}

impl Default for FileConversationConfig {
    fn default() -> Self {
        Self {
            max_context_entries: DEFAULT_MAX_ENTRIES,
            max_context_chars: DEFAULT_MAX_CHARS,
            speak_responses: true,
        }
    }
}

impl FileConversationConfig {
    pub fn to_params(&self) -> ConversationParams {
        let limit = |n: usize| if n == 0 { None } else { Some(n) };
        ConversationParams::default()
            .with_window(
                ContextWindow::unbounded()
                    .with_max_entries(limit(self.max_context_entries))
                    .with_max_chars(limit(self.max_context_chars)),
            )
            .with_synthesis(self.speak_responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_application_defaults() {
        let params = FileConversationConfig::default().to_params();
        assert_eq!(params, ConversationParams::default());
    }

    #[test]
    fn test_zero_disables_limit() {
        let config = FileConversationConfig {
            max_context_entries: 0,
            max_context_chars: 0,
            speak_responses: false,
        };
        let params = config.to_params();
        assert_eq!(params.window, ContextWindow::unbounded());
        assert!(!params.synthesize);
    }
}
