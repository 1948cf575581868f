//! Scripted port doubles shared by the use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::generative_gateway::{GatewayError, GenerationRequest, GenerativeGateway};
use crate::ports::progress::{Stage, TurnProgressNotifier};
use crate::ports::speech_recognizer::SpeechRecognizerPort;
use crate::ports::speech_synthesizer::{SpeechSynthesizerPort, SynthesisError, VoiceProfile};
use async_trait::async_trait;
use calorie_domain::{
    AudioFormat, GenerativeModel, Language, RecognitionOutcome, SynthesizedAudio,
};
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct MockGateway {
    model: GenerativeModel,
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGateway {
    pub fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            model: GenerativeModel::default(),
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeGateway for MockGateway {
    fn model(&self) -> &GenerativeModel {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GatewayError::EmptyResponse))
    }
}

pub struct MockSynthesizer {
    result: Result<SynthesizedAudio, SynthesisError>,
    pub calls: Mutex<Vec<(String, VoiceProfile)>>,
}

impl MockSynthesizer {
    pub fn ok() -> Self {
        Self::with_result(Ok(SynthesizedAudio::new(
            AudioFormat::default(),
            b"RIFF....WAVE".to_vec(),
        )))
    }

    pub fn with_result(result: Result<SynthesizedAudio, SynthesisError>) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(t, _)| t.clone())
            .collect()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for MockSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        profile: &VoiceProfile,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), *profile));
        self.result.clone()
    }
}

pub struct MockRecognizer {
    outcome: RecognitionOutcome,
    pub languages: Mutex<Vec<Language>>,
}

impl MockRecognizer {
    pub fn new(outcome: RecognitionOutcome) -> Self {
        Self {
            outcome,
            languages: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SpeechRecognizerPort for MockRecognizer {
    async fn recognize_once(&self, language: Language) -> RecognitionOutcome {
        self.languages.lock().unwrap().push(language);
        self.outcome.clone()
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub events: Mutex<Vec<(Stage, Option<bool>)>>,
}

impl TurnProgressNotifier for RecordingProgress {
    fn on_stage_start(&self, stage: Stage) {
        self.events.lock().unwrap().push((stage, None));
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        self.events.lock().unwrap().push((stage, Some(success)));
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    pub events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
