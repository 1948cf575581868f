use crate::config::{Credentials, FileSpeechConfig};
use calorie_domain::AudioFormat;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoint and credential settings shared by both speech adapters.
#[derive(Clone)]
pub struct AzureSpeechConfig {
    pub subscription_key: String,
    pub region: String,
    pub stt_base_url: String,
    pub tts_base_url: String,
    pub output_format: AudioFormat,
    pub timeout: Duration,
}

impl AzureSpeechConfig {
    /// Regional endpoints for `region` with default settings.
    pub fn new(subscription_key: impl Into<String>, region: impl Into<String>) -> Self {
        let region = region.into();
        Self {
            subscription_key: subscription_key.into(),
            stt_base_url: format!("https://{region}.stt.speech.microsoft.com"),
            tts_base_url: format!("https://{region}.tts.speech.microsoft.com"),
            region,
            output_format: AudioFormat::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_parts(credentials: &Credentials, file: &FileSpeechConfig) -> Self {
        let mut config = Self::new(
            credentials.speech_subscription_key.clone(),
            credentials.speech_region.clone(),
        );
        if let Some(url) = &file.stt_base_url {
            config.stt_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = &file.tts_base_url {
            config.tts_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = file.timeout_seconds {
            config.timeout = Duration::from_secs(secs);
        }
        config.output_format = file.output_format;
        config
    }

    pub fn with_base_urls(mut self, stt: impl Into<String>, tts: impl Into<String>) -> Self {
        self.stt_base_url = stt.into().trim_end_matches('/').to_string();
        self.tts_base_url = tts.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn recognition_url(&self) -> String {
        format!(
            "{}/speech/recognition/conversation/cognitiveservices/v1",
            self.stt_base_url
        )
    }

    pub(crate) fn synthesis_url(&self) -> String {
        format!("{}/cognitiveservices/v1", self.tts_base_url)
    }
}

impl std::fmt::Debug for AzureSpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureSpeechConfig")
            .field("subscription_key", &"<redacted>")
            .field("region", &self.region)
            .field("stt_base_url", &self.stt_base_url)
            .field("tts_base_url", &self.tts_base_url)
            .field("output_format", &self.output_format)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_endpoints() {
        let config = AzureSpeechConfig::new("key", "westeurope");
        assert_eq!(
            config.recognition_url(),
            "https://westeurope.stt.speech.microsoft.com/speech/recognition/conversation/cognitiveservices/v1"
        );
        assert_eq!(
            config.synthesis_url(),
            "https://westeurope.tts.speech.microsoft.com/cognitiveservices/v1"
        );
    }

    #[test]
    fn test_file_overrides_apply() {
        let credentials = Credentials {
            google_api_key: "g".to_string(),
            speech_subscription_key: "s".to_string(),
            speech_region: "eastus".to_string(),
        };
        let file = FileSpeechConfig {
            stt_base_url: Some("http://localhost:9000/".to_string()),
            tts_base_url: None,
            output_format: AudioFormat::Riff16Khz16BitMonoPcm,
            timeout_seconds: Some(5),
        };

        let config = AzureSpeechConfig::from_parts(&credentials, &file);
        assert_eq!(config.stt_base_url, "http://localhost:9000");
        assert_eq!(config.tts_base_url, "https://eastus.tts.speech.microsoft.com");
        assert_eq!(config.output_format, AudioFormat::Riff16Khz16BitMonoPcm);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = AzureSpeechConfig::new("super-secret", "eastus");
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
