//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show spinners while waiting on remote services
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
}

impl ReplConfig {
    /// Configured history file, or the per-user data directory default.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|p| p.join("calorie-doctor").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_file_wins() {
        let config = ReplConfig {
            history_file: Some("/tmp/calorie-history".to_string()),
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/calorie-history"))
        );
    }

    #[test]
    fn test_defaults() {
        let output = OutputConfig::default();
        assert!(output.color);
        assert!(output.show_progress);
    }
}
