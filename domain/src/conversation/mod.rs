//! Conversation domain.
//!
//! - [`entities::ConversationLog`]: append-only log of labeled turns
//! - [`entities::ConversationEntry`]: one `User:`/`Bot:` entry
//! - [`window::ContextWindow`]: bounded context policy for the next prompt

pub mod entities;
pub mod window;
