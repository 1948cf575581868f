//! Run Turn use case.
//!
//! One full user turn: converse, personalize, then synthesize the answer.
//! Generation failure aborts the turn; synthesis failure keeps the text.

use crate::config::ConversationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::generative_gateway::{GatewayError, GenerativeGateway};
use crate::ports::progress::{Stage, TurnProgressNotifier};
use crate::ports::speech_synthesizer::{SpeechSynthesizerPort, SynthesisError, VoiceProfile};
use crate::use_cases::converse::{ConverseError, ConverseUseCase};
use calorie_domain::{SessionContext, SynthesizedAudio, personalize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a turn before any text is shown.
#[derive(Error, Debug)]
pub enum RunTurnError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] GatewayError),
}

impl From<ConverseError> for RunTurnError {
    fn from(e: ConverseError) -> Self {
        match e {
            ConverseError::EmptyInput => RunTurnError::EmptyInput,
            ConverseError::Upstream(g) => RunTurnError::Upstream(g),
        }
    }
}

/// What happened to the spoken version of the answer
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechResult {
    Audio(SynthesizedAudio),
    Failed(SynthesisError),
    Skipped,
}

impl SpeechResult {
    pub fn audio(&self) -> Option<&SynthesizedAudio> {
        match self {
            SpeechResult::Audio(a) => Some(a),
            _ => None,
        }
    }
}

/// Result of a completed turn
#[derive(Debug, Clone)]
pub struct TurnOutput {
    /// Personalized answer text
    pub response: String,
    pub speech: SpeechResult,
}

/// Use case for a full turn.
#[derive(Clone)]
pub struct RunTurnUseCase {
    converse: ConverseUseCase,
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunTurnUseCase {
    pub fn new(
        gateway: Arc<dyn GenerativeGateway>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
    ) -> Self {
        Self {
            converse: ConverseUseCase::new(gateway),
            synthesizer,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.converse = self.converse.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(
        &self,
        session: &mut SessionContext,
        text: &str,
        params: &ConversationParams,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<TurnOutput, RunTurnError> {
        progress.on_stage_start(Stage::Processing);
        let generated = self.converse.execute(session, text, params).await;
        progress.on_stage_complete(Stage::Processing, generated.is_ok());
        let generated = generated?;

        let response = personalize(&generated, session.preferences());

        let speech = if params.synthesize {
            self.synthesize(&response, session, progress).await
        } else {
            SpeechResult::Skipped
        };

        Ok(TurnOutput { response, speech })
    }

    async fn synthesize(
        &self,
        text: &str,
        session: &SessionContext,
        progress: &dyn TurnProgressNotifier,
    ) -> SpeechResult {
        let profile = VoiceProfile::from_preferences(session.preferences());

        progress.on_stage_start(Stage::Synthesizing);
        let result = self.synthesizer.synthesize(text, &profile).await;
        progress.on_stage_complete(Stage::Synthesizing, result.is_ok());

        match result {
            Ok(audio) => {
                info!("Synthesized {} bytes of audio", audio.len());
                self.conversation_logger.log(ConversationEvent::synthesis(serde_json::json!({
                    "success": true,
                    "bytes": audio.len(),
                    "voice": profile.voice.as_str(),
                    "language": profile.language.locale(),
                })));
                SpeechResult::Audio(audio)
            }
            Err(e) => {
                warn!("Synthesis failed: {}", e);
                self.conversation_logger.log(ConversationEvent::synthesis(serde_json::json!({
                    "success": false,
                    "error": e.to_string(),
                })));
                SpeechResult::Failed(e)
            }
        }
    }
}
