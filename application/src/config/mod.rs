//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ConversationParams`]: context window and synthesis switch for a turn

pub mod conversation_params;

pub use conversation_params::ConversationParams;
