//! Speech service configuration from TOML (`[speech]` section)

use calorie_domain::AudioFormat;
use serde::{Deserialize, Serialize};

/// Raw speech service configuration from TOML
///
/// Credentials never live here; they come from the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpeechConfig {
    /// Override for the recognition endpoint base URL
    pub stt_base_url: Option<String>,
    /// Override for the synthesis endpoint base URL
    pub tts_base_url: Option<String>,
    /// Synthesis output format
    pub output_format: AudioFormat,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}
