//! Hand-written port doubles for REPL and pipeline tests.

use async_trait::async_trait;
use calorie_application::{
    AudioOutputError, AudioPlayerPort, GatewayError, GenerationRequest, GenerativeGateway,
    ImageOpenError, ImageSource, ImageUpload, SpeechRecognizerPort, SpeechSynthesizerPort,
    SynthesisError, VoiceProfile,
};
use calorie_domain::{
    AudioFormat, GenerativeModel, ImageMime, Language, RecognitionOutcome, SynthesizedAudio,
};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Replies in order; runs out into a connection error.
pub struct ScriptedGateway {
    model: GenerativeModel,
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGateway {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            model: GenerativeModel::default(),
            replies: Mutex::new(replies.iter().map(|r| Ok(r.to_string())).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// First call times out, then replies in order.
    pub fn failing_first(replies: &[&str]) -> Self {
        let gateway = Self::new(replies);
        gateway
            .replies
            .lock()
            .unwrap()
            .push_front(Err(GatewayError::Timeout));
        gateway
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request_had_image(&self) -> bool {
        self.requests
            .lock()
            .unwrap()
            .last()
            .is_some_and(|r| r.image.is_some())
    }
}

#[async_trait]
impl GenerativeGateway for ScriptedGateway {
    fn model(&self) -> &GenerativeModel {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Connection("no scripted reply".to_string())))
    }
}

pub struct SilentSynthesizer;

#[async_trait]
impl SpeechSynthesizerPort for SilentSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _profile: &VoiceProfile,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        Ok(SynthesizedAudio::new(AudioFormat::default(), vec![0; 16]))
    }
}

pub struct FailingSynthesizer;

#[async_trait]
impl SpeechSynthesizerPort for FailingSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _profile: &VoiceProfile,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        Err(SynthesisError::Connection("speech service unreachable".to_string()))
    }
}

pub struct ScriptedRecognizer(pub RecognitionOutcome);

#[async_trait]
impl SpeechRecognizerPort for ScriptedRecognizer {
    async fn recognize_once(&self, _language: Language) -> RecognitionOutcome {
        self.0.clone()
    }
}

struct CountingPlayer(Arc<AtomicUsize>);

impl AudioPlayerPort for CountingPlayer {
    fn describe(&self) -> String {
        "test speaker".to_string()
    }

    fn play(&self, _audio: &SynthesizedAudio) -> Result<(), AudioOutputError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn recording_player() -> (Arc<dyn AudioPlayerPort>, Arc<AtomicUsize>) {
    let plays = Arc::new(AtomicUsize::new(0));
    (Arc::new(CountingPlayer(Arc::clone(&plays))), plays)
}

struct InMemoryImage {
    name: String,
}

impl ImageUpload for InMemoryImage {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> ImageMime {
        ImageMime::Png
    }

    fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}

/// Accepts `.png` paths without touching the filesystem.
pub struct FakeImageSource;

impl ImageSource for FakeImageSource {
    fn open(&self, path: &Path) -> Result<Box<dyn ImageUpload>, ImageOpenError> {
        if path.extension().is_some_and(|e| e == "png") {
            Ok(Box::new(InMemoryImage {
                name: path.display().to_string(),
            }))
        } else {
            Err(ImageOpenError(format!("{}: unsupported", path.display())))
        }
    }
}
