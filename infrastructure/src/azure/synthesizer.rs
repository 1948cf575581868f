//! Azure text-to-speech.

use super::ssml::build_ssml;
use super::{AzureSpeechConfig, SUBSCRIPTION_KEY_HEADER};
use async_trait::async_trait;
use calorie_application::{SpeechSynthesizerPort, SynthesisError, VoiceProfile};
use calorie_domain::SynthesizedAudio;
use reqwest::Client;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("calorie-doctor/", env!("CARGO_PKG_VERSION"));

pub struct AzureSpeechSynthesizer {
    client: Client,
    config: AzureSpeechConfig,
}

impl AzureSpeechSynthesizer {
    pub fn new(config: AzureSpeechConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl SpeechSynthesizerPort for AzureSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        profile: &VoiceProfile,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        let body = build_ssml(text, profile);
        let format = self.config.output_format;
        debug!(
            "Synthesizing {} chars as {} ({})",
            text.len(),
            format.header_value(),
            profile.speed.as_percent_delta()
        );

        let response = self
            .client
            .post(self.config.synthesis_url())
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.subscription_key)
            .header(reqwest::header::CONTENT_TYPE, "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", format.header_value())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .body(body)
            .send()
            .await
            .map_err(|e| SynthesisError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!("Synthesis returned HTTP {}: {}", status, detail);
            let detail = if detail.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                detail.trim().to_string()
            };
            return Err(SynthesisError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Connection(e.to_string()))?;
        if bytes.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        Ok(SynthesizedAudio::new(format, bytes.to_vec()))
    }
}
