//! Analyze Meal use case.
//!
//! Sends the user's text together with the attached meal photo and the fixed
//! calorie-analysis instruction in a single generation call.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::generative_gateway::{GatewayError, GenerationRequest, GenerativeGateway};
use crate::ports::progress::{Stage, TurnProgressNotifier};
use calorie_domain::{ImageParts, PromptTemplate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum AnalyzeMealError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("No image attached")]
    NoImage,

    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] GatewayError),
}

#[derive(Clone)]
pub struct AnalyzeMealUseCase {
    gateway: Arc<dyn GenerativeGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnalyzeMealUseCase {
    pub fn new(gateway: Arc<dyn GenerativeGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Analyze the first attached image. Only `images[0]` is ever sent.
    pub async fn execute(
        &self,
        text: &str,
        images: &ImageParts,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<String, AnalyzeMealError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalyzeMealError::EmptyInput);
        }
        let image = images.first().ok_or(AnalyzeMealError::NoImage)?;

        info!(
            "Analyzing meal image ({}, {} bytes)",
            image.mime_type,
            image.len()
        );

        let request = GenerationRequest::new(text, PromptTemplate::meal_analysis())
            .with_image(image.clone());

        progress.on_stage_start(Stage::AnalyzingImage);
        let result = self.gateway.generate(&request).await;
        progress.on_stage_complete(Stage::AnalyzingImage, result.is_ok());

        let analysis = result.map_err(|e| {
            warn!("Meal analysis failed: {}", e);
            AnalyzeMealError::Upstream(e)
        })?;

        self.conversation_logger.log(ConversationEvent::meal_analysis(serde_json::json!({
            "model": self.gateway.model().to_string(),
            "image_mime": image.mime_type.as_str(),
            "image_bytes": image.len(),
            "text": analysis,
        })));

        Ok(analysis)
    }
}
