//! Synthesized audio value objects

use serde::{Deserialize, Serialize};

/// Output formats requested from the synthesis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AudioFormat {
    #[default]
    #[serde(rename = "riff-24khz-16bit-mono-pcm")]
    Riff24Khz16BitMonoPcm,
    #[serde(rename = "riff-16khz-16bit-mono-pcm")]
    Riff16Khz16BitMonoPcm,
}

impl AudioFormat {
    /// Value of the `X-Microsoft-OutputFormat` header.
    pub fn header_value(&self) -> &'static str {
        match self {
            AudioFormat::Riff24Khz16BitMonoPcm => "riff-24khz-16bit-mono-pcm",
            AudioFormat::Riff16Khz16BitMonoPcm => "riff-16khz-16bit-mono-pcm",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        "audio/wav"
    }

    pub fn sample_rate(&self) -> u32 {
        match self {
            AudioFormat::Riff24Khz16BitMonoPcm => 24_000,
            AudioFormat::Riff16Khz16BitMonoPcm => 16_000,
        }
    }
}

/// One complete synthesized utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub format: AudioFormat,
    pub data: Vec<u8>,
}

impl SynthesizedAudio {
    pub fn new(format: AudioFormat, data: Vec<u8>) -> Self {
        Self { format, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
