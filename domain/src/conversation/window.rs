//! Bounded context window for conversation prompts.
//!
//! Every turn sends a flattened context string to the generative model.
//! [`ContextWindow`] bounds that string so prompt size does not grow with
//! the length of the session.

use super::entities::{ConversationEntry, ConversationLog};
use serde::{Deserialize, Serialize};

/// Default number of labeled entries included in the context.
pub const DEFAULT_MAX_ENTRIES: usize = 20;

/// Default character budget for the joined context.
pub const DEFAULT_MAX_CHARS: usize = 8_000;

/// Policy deciding which log entries make it into the next prompt (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextWindow {
    /// Maximum number of labeled entries, including the pending user entry.
    pub max_entries: Option<usize>,
    /// Maximum length in characters of the joined context.
    pub max_chars: Option<usize>,
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self {
            max_entries: Some(DEFAULT_MAX_ENTRIES),
            max_chars: Some(DEFAULT_MAX_CHARS),
        }
    }
}

impl ContextWindow {
    /// Include every entry, however long the session gets.
    pub fn unbounded() -> Self {
        Self {
            max_entries: None,
            max_chars: None,
        }
    }

    pub fn with_max_entries(mut self, max: Option<usize>) -> Self {
        self.max_entries = max;
        self
    }

    pub fn with_max_chars(mut self, max: Option<usize>) -> Self {
        self.max_chars = max;
        self
    }

    /// Build the flattened context for a new turn.
    ///
    /// The pending user entry is always last and is never dropped; older
    /// entries are dropped oldest-first until both limits hold. Labels are
    /// joined with a single space.
    pub fn build_context(&self, log: &ConversationLog, pending_user_text: &str) -> String {
        let pending = ConversationEntry::user(pending_user_text).label();
        let history = log.labels();

        let mut start = 0;
        if let Some(max_entries) = self.max_entries {
            let room = max_entries.saturating_sub(1);
            start = history.len().saturating_sub(room);
        }

        if let Some(max_chars) = self.max_chars {
            let mut total = joined_len(&history[start..], &pending);
            while start < history.len() && total > max_chars {
                // Dropping an entry also drops its separating space
                total -= history[start].chars().count() + 1;
                start += 1;
            }
        }

        let mut parts: Vec<&str> = history[start..].iter().map(String::as_str).collect();
        parts.push(&pending);
        parts.join(" ")
    }
}

fn joined_len(history: &[String], pending: &str) -> usize {
    history.iter().map(|s| s.chars().count() + 1).sum::<usize>() + pending.chars().count()
}
