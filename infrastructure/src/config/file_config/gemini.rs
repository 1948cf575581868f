//! Generative model configuration from TOML (`[gemini]` section)

use calorie_domain::GenerativeModel;
use serde::{Deserialize, Serialize};

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier, e.g. "gemini-1.5-flash"
    pub model: GenerativeModel,
    /// Request timeout in seconds (owned by the HTTP client)
    pub timeout_seconds: u64,
    /// Override for the REST base URL
    pub base_url: Option<String>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: GenerativeModel::default(),
            timeout_seconds: 60,
            base_url: None,
        }
    }
}
