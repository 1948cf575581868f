//! Presentation layer for calorie-doctor
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod widget;

// Re-export commonly used types
pub use chat::{CalorieRepl, TurnPipeline, TurnReport};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SilentProgress, SpinnerProgress};
pub use widget::WidgetEmbed;
