//! Capture Speech use case.
//!
//! Records one utterance and, when it is recognized, stores the text in the
//! session so the next input is pre-filled with it.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{Stage, TurnProgressNotifier};
use crate::ports::speech_recognizer::SpeechRecognizerPort;
use calorie_domain::{RecognitionOutcome, SessionContext};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct CaptureSpeechUseCase {
    recognizer: Arc<dyn SpeechRecognizerPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl CaptureSpeechUseCase {
    pub fn new(recognizer: Arc<dyn SpeechRecognizerPort>) -> Self {
        Self {
            recognizer,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Callers must handle all three outcomes.
    pub async fn execute(
        &self,
        session: &mut SessionContext,
        progress: &dyn TurnProgressNotifier,
    ) -> RecognitionOutcome {
        let language = session.preferences().language;

        progress.on_stage_start(Stage::Listening);
        let outcome = self.recognizer.recognize_once(language).await;
        progress.on_stage_complete(
            Stage::Listening,
            matches!(outcome, RecognitionOutcome::Recognized(_)),
        );

        match &outcome {
            RecognitionOutcome::Recognized(text) => {
                info!("Recognized {} chars", text.as_str().len());
                session.set_transcription(text.clone());
            }
            RecognitionOutcome::NoMatch => info!("No speech could be recognized"),
            RecognitionOutcome::Canceled { reason, detail } => {
                warn!(
                    "Recognition canceled: {} {}",
                    reason,
                    detail.as_deref().unwrap_or("")
                );
            }
        }

        self.conversation_logger.log(ConversationEvent::recognition(serde_json::json!({
            "outcome": outcome.kind(),
            "language": language.locale(),
            "text": outcome.text().map(|t| t.as_str()),
        })));

        outcome
    }
}
