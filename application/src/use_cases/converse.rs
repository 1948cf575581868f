//! Conversation use case.
//!
//! Derives a flattened prompt from the session's conversation log, asks the
//! generative model to continue it. The question is logged before the call,
//! the answer only once it arrives.

use crate::config::ConversationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::generative_gateway::{GatewayError, GenerationRequest, GenerativeGateway};
use calorie_domain::util::log_preview;
use calorie_domain::{PromptTemplate, SessionContext};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a conversation turn.
#[derive(Error, Debug)]
pub enum ConverseError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] GatewayError),
}

/// Use case for one conversational turn.
///
/// 1. Build the bounded context (history plus the pending `User:` entry)
/// 2. Call the gateway with the raw user text and the context prompt
/// 3. Record `User:` and `Bot:` entries together once the call succeeds
///
/// A failed call records nothing, so the log keeps alternating.
#[derive(Clone)]
pub struct ConverseUseCase {
    gateway: Arc<dyn GenerativeGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ConverseUseCase {
    pub fn new(gateway: Arc<dyn GenerativeGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(
        &self,
        session: &mut SessionContext,
        text: &str,
        params: &ConversationParams,
    ) -> Result<String, ConverseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConverseError::EmptyInput);
        }

        info!("Starting turn: {}", log_preview(text, 100));

        let context = params.window.build_context(session.conversation(), text);
        session.conversation_mut().record_user(text);
        debug!(
            "Context: {} chars from {} logged entries",
            context.chars().count(),
            session.conversation().len()
        );

        self.conversation_logger.log(ConversationEvent::user_turn(serde_json::json!({
            "model": self.gateway.model().to_string(),
            "text": text,
            "context_chars": context.chars().count(),
        })));

        let request = GenerationRequest::new(text, PromptTemplate::continue_conversation(&context));
        let response = match self.gateway.generate(&request).await {
            Ok(r) => r,
            Err(e) => {
                warn!(transient = e.is_transient(), "Generation failed: {}", e);
                self.conversation_logger.log(ConversationEvent::bot_response(serde_json::json!({
                    "model": self.gateway.model().to_string(),
                    "error": e.to_string(),
                    "transient": e.is_transient(),
                })));
                return Err(ConverseError::Upstream(e));
            }
        };

        session.conversation_mut().record_bot(response.as_str());

        self.conversation_logger.log(ConversationEvent::bot_response(serde_json::json!({
            "model": self.gateway.model().to_string(),
            "bytes": response.len(),
            "text": response,
        })));

        Ok(response)
    }
}
