//! Conversation domain entities

use serde::{Deserialize, Serialize};

/// Who produced a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Bot => "Bot",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry in the conversation (Entity)
///
/// Entries are immutable once appended to a [`ConversationLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    role: Role,
    text: String,
}

impl ConversationEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The labeled form used in the prompt context, e.g. `"User: Is pizza healthy?"`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.role, self.text)
    }
}

/// Append-only, ordered conversation log (Entity)
///
/// Order is append order and is the context window. The user's entry is
/// appended when a turn starts and the bot's only when an answer arrives,
/// so a failed turn leaves its question behind without a reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_user(&mut self, text: impl Into<String>) {
        self.entries.push(ConversationEntry::user(text));
    }

    pub fn record_bot(&mut self, text: impl Into<String>) {
        self.entries.push(ConversationEntry::bot(text));
    }

    /// Record a completed turn: the user's text followed by the bot's reply.
    pub fn record_turn(&mut self, user_text: impl Into<String>, bot_text: impl Into<String>) {
        self.record_user(user_text);
        self.record_bot(bot_text);
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of answered turns.
    pub fn turn_count(&self) -> usize {
        self.entries.iter().filter(|e| e.role == Role::Bot).count()
    }

    /// Labeled entries in order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(ConversationEntry::label).collect()
    }
}
