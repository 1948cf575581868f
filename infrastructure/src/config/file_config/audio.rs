//! Audio device configuration from TOML (`[audio]` section)

use serde::{Deserialize, Serialize};

/// Raw audio configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAudioConfig {
    /// Input device name (default device when unset)
    pub input_device: Option<String>,
    /// Output device name (default device when unset)
    pub output_device: Option<String>,
    /// Hard cap on one recorded utterance
    pub max_record_seconds: u64,
    /// Silence after speech that ends the utterance
    pub trailing_silence_ms: u64,
    /// Play synthesized answers on the output device
    pub playback: bool,
    /// Also save synthesized answers as WAV files here
    pub save_dir: Option<String>,
}

impl Default for FileAudioConfig {
    fn default() -> Self {
        Self {
            input_device: None,
            output_device: None,
            max_record_seconds: 15,
            trailing_silence_ms: 1200,
            playback: true,
            save_dir: None,
        }
    }
}
