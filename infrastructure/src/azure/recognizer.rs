//! Azure speech-to-text over the short-audio REST endpoint.

use super::types::SimpleRecognitionResponse;
use super::{AzureSpeechConfig, SUBSCRIPTION_KEY_HEADER};
use crate::audio::{CAPTURE_SAMPLE_RATE, UtteranceSource, wav};
use async_trait::async_trait;
use calorie_application::SpeechRecognizerPort;
use calorie_domain::{CancellationReason, Language, RecognitionOutcome};
use reqwest::Client;
use tracing::{debug, warn};

const WAV_CONTENT_TYPE: &str = "audio/wav; codecs=audio/pcm; samplerate=16000";

/// Recognizer that records from `S` and asks Azure what was said.
pub struct AzureSpeechRecognizer<S: UtteranceSource> {
    client: Client,
    config: AzureSpeechConfig,
    source: S,
}

impl<S: UtteranceSource> AzureSpeechRecognizer<S> {
    pub fn new(config: AzureSpeechConfig, source: S) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            source,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Send an already-encoded 16 kHz mono WAV clip.
    pub async fn recognize_wav(&self, wav_bytes: Vec<u8>, language: Language) -> RecognitionOutcome {
        let response = self
            .client
            .post(self.config.recognition_url())
            .query(&[("language", language.locale()), ("format", "simple")])
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.subscription_key)
            .header(reqwest::header::CONTENT_TYPE, WAV_CONTENT_TYPE)
            .header(reqwest::header::ACCEPT, "application/json")
            .body(wav_bytes)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!("Recognition request failed: {}", e);
                return RecognitionOutcome::canceled(CancellationReason::Error, e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Recognition returned HTTP {}: {}", status, body);
            let detail = if body.trim().is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                format!("HTTP {}: {}", status.as_u16(), body.trim())
            };
            return RecognitionOutcome::canceled(CancellationReason::Error, detail);
        }

        match response.json::<SimpleRecognitionResponse>().await {
            Ok(parsed) => map_recognition(parsed),
            Err(e) => RecognitionOutcome::canceled(
                CancellationReason::Error,
                format!("invalid recognition response: {e}"),
            ),
        }
    }
}

fn map_recognition(response: SimpleRecognitionResponse) -> RecognitionOutcome {
    debug!("RecognitionStatus: {}", response.recognition_status);
    match response.recognition_status.as_str() {
        "Success" => RecognitionOutcome::from_text(response.display_text.unwrap_or_default()),
        "NoMatch" | "InitialSilenceTimeout" | "BabbleTimeout" => RecognitionOutcome::NoMatch,
        other => RecognitionOutcome::canceled(
            CancellationReason::Error,
            format!("RecognitionStatus: {other}"),
        ),
    }
}

#[async_trait]
impl<S: UtteranceSource> SpeechRecognizerPort for AzureSpeechRecognizer<S> {
    async fn recognize_once(&self, language: Language) -> RecognitionOutcome {
        let samples = match self.source.capture_utterance().await {
            Ok(samples) => samples,
            Err(e) => {
                warn!("Capture from {} failed: {}", self.source.describe(), e);
                return RecognitionOutcome::canceled(CancellationReason::Error, e.to_string());
            }
        };

        if samples.is_empty() {
            return RecognitionOutcome::Canceled {
                reason: CancellationReason::EndOfStream,
                detail: None,
            };
        }

        let wav_bytes = match wav::encode_pcm16(&samples, CAPTURE_SAMPLE_RATE) {
            Ok(bytes) => bytes,
            Err(e) => {
                return RecognitionOutcome::canceled(
                    CancellationReason::Error,
                    format!("could not encode audio: {e}"),
                );
            }
        };

        debug!(
            "Recognizing {} samples ({} bytes) as {}",
            samples.len(),
            wav_bytes.len(),
            language.locale()
        );
        self.recognize_wav(wav_bytes, language).await
    }
}
