//! Azure Speech contract tests
//!
//! Recognition goes through a scripted utterance source instead of the
//! microphone; synthesis checks the SSML request and the error mapping.

use async_trait::async_trait;
use calorie_application::{
    SpeechRecognizerPort, SpeechSynthesizerPort, SynthesisError, VoiceProfile,
};
use calorie_domain::{
    AudioFormat, CancellationReason, Language, RecognitionOutcome, SpeechSpeed, VoiceGender,
};
use calorie_infrastructure::{
    AzureSpeechConfig, AzureSpeechRecognizer, AzureSpeechSynthesizer, CaptureError,
    UtteranceSource,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECOGNITION_PATH: &str = "/speech/recognition/conversation/cognitiveservices/v1";
const SYNTHESIS_PATH: &str = "/cognitiveservices/v1";

enum ScriptedSource {
    Speech,
    Silence,
    Broken,
}

#[async_trait]
impl UtteranceSource for ScriptedSource {
    async fn capture_utterance(&self) -> Result<Vec<f32>, CaptureError> {
        match self {
            ScriptedSource::Speech => Ok(vec![0.25; 1600]),
            ScriptedSource::Silence => Ok(Vec::new()),
            ScriptedSource::Broken => Err(CaptureError::Device("no default input device".into())),
        }
    }

    fn describe(&self) -> String {
        "scripted source".to_string()
    }
}

fn config(server: &MockServer) -> AzureSpeechConfig {
    AzureSpeechConfig::new("speech-key", "eastus").with_base_urls(server.uri(), server.uri())
}

fn recognizer(server: &MockServer, source: ScriptedSource) -> AzureSpeechRecognizer<ScriptedSource> {
    AzureSpeechRecognizer::new(config(server), source).unwrap()
}

#[tokio::test]
async fn test_recognition_sends_wav_with_locale_and_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RECOGNITION_PATH))
        .and(query_param("language", "es-ES"))
        .and(query_param("format", "simple"))
        .and(header("Ocp-Apim-Subscription-Key", "speech-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RecognitionStatus": "Success",
            "DisplayText": "Una ensalada, por favor.",
            "Offset": 0,
            "Duration": 1000000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = recognizer(&server, ScriptedSource::Speech)
        .recognize_once(Language::Spanish)
        .await;

    assert_eq!(
        outcome.text().map(|t| t.as_str()),
        Some("Una ensalada, por favor.")
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(&requests[0].body[0..4], b"RIFF");
}

#[tokio::test]
async fn test_initial_silence_is_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RECOGNITION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RecognitionStatus": "InitialSilenceTimeout",
            "Offset": 0,
            "Duration": 0
        })))
        .mount(&server)
        .await;

    let outcome = recognizer(&server, ScriptedSource::Speech)
        .recognize_once(Language::English)
        .await;
    assert_eq!(outcome, RecognitionOutcome::NoMatch);
}

#[tokio::test]
async fn test_unauthorized_recognition_is_canceled_with_error_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RECOGNITION_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("Access denied"))
        .mount(&server)
        .await;

    let outcome = recognizer(&server, ScriptedSource::Speech)
        .recognize_once(Language::English)
        .await;

    match outcome {
        RecognitionOutcome::Canceled { reason, detail } => {
            assert_eq!(reason, CancellationReason::Error);
            assert_eq!(detail.as_deref(), Some("HTTP 401: Access denied"));
        }
        other => panic!("expected Canceled, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_capture_is_end_of_stream_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = recognizer(&server, ScriptedSource::Silence)
        .recognize_once(Language::English)
        .await;

    assert_eq!(
        outcome,
        RecognitionOutcome::Canceled {
            reason: CancellationReason::EndOfStream,
            detail: None
        }
    );
}

#[tokio::test]
async fn test_capture_failure_is_canceled_error() {
    let server = MockServer::start().await;

    let outcome = recognizer(&server, ScriptedSource::Broken)
        .recognize_once(Language::English)
        .await;

    match outcome {
        RecognitionOutcome::Canceled { reason, detail } => {
            assert_eq!(reason, CancellationReason::Error);
            assert!(detail.unwrap().contains("no default input device"));
        }
        other => panic!("expected Canceled, got {other:?}"),
    }
}

#[tokio::test]
async fn test_synthesis_posts_ssml_and_returns_audio() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SYNTHESIS_PATH))
        .and(header("Ocp-Apim-Subscription-Key", "speech-key"))
        .and(header("Content-Type", "application/ssml+xml"))
        .and(header("X-Microsoft-OutputFormat", "riff-24khz-16bit-mono-pcm"))
        .and(body_string_contains("<voice name=\"de-DE-KatjaNeural\">"))
        .and(body_string_contains("<prosody rate=\"-25%\">"))
        .and(body_string_contains("Wurst &amp; Brot"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"RIFF\x24\x00\x00\x00WAVE".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let synthesizer = AzureSpeechSynthesizer::new(config(&server)).unwrap();
    let profile = VoiceProfile {
        language: Language::German,
        voice: VoiceGender::Female,
        speed: SpeechSpeed::new(0.75).unwrap(),
    };

    let audio = synthesizer.synthesize("Wurst & Brot", &profile).await.unwrap();
    assert_eq!(audio.format, AudioFormat::Riff24Khz16BitMonoPcm);
    assert_eq!(&audio.data[0..4], b"RIFF");
}

#[tokio::test]
async fn test_synthesis_http_error_keeps_status_and_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SYNTHESIS_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too many requests"))
        .mount(&server)
        .await;

    let synthesizer = AzureSpeechSynthesizer::new(config(&server)).unwrap();
    let err = synthesizer
        .synthesize("hello", &VoiceProfile::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SynthesisError::Http {
            status: 429,
            detail: "Too many requests".to_string()
        }
    );
}

#[tokio::test]
async fn test_synthesis_empty_body_is_empty_audio() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SYNTHESIS_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let synthesizer = AzureSpeechSynthesizer::new(config(&server)).unwrap();
    let err = synthesizer
        .synthesize("hello", &VoiceProfile::default())
        .await
        .unwrap_err();
    assert_eq!(err, SynthesisError::EmptyAudio);
}
