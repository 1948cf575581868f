//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for Calorie Doctor.

pub mod command;
mod repl;
mod turn;

#[cfg(test)]
pub(crate) mod test_support;

pub use command::{CommandError, ReplCommand, SettingKey, apply_setting};
pub use repl::{CalorieRepl, Flow};
pub use turn::{TurnPipeline, TurnReport};
