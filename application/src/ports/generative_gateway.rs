//! Generative model gateway port
//!
//! Defines the interface for the remote model that answers questions about
//! meals, with or without a photo.

use async_trait::async_trait;
use calorie_domain::{GenerativeModel, ImagePayload};
use thiserror::Error;

/// Errors that can occur during a generation call.
///
/// Nothing is retried; the caller reports the failure and the turn is dropped.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Timeout")]
    Timeout,

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Failures where asking again later may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::Connection(_) | GatewayError::Timeout => true,
            GatewayError::Http { status, .. } => *status == 429 || *status >= 500,
            GatewayError::EmptyResponse | GatewayError::InvalidResponse(_) => false,
        }
    }
}

/// One generation request: primary text, optional image, steering prompt
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub input_text: String,
    pub image: Option<ImagePayload>,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(input_text: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            image: None,
            prompt: prompt.into(),
        }
    }

    pub fn with_image(mut self, image: ImagePayload) -> Self {
        self.image = Some(image);
        self
    }
}

/// Gateway to the generative model
///
/// Implementations (adapters) live in the infrastructure layer. The call is
/// not idempotent: the remote model may answer differently each time.
#[async_trait]
pub trait GenerativeGateway: Send + Sync {
    /// The model answering requests
    fn model(&self) -> &GenerativeModel;

    /// Generate text for the request
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError>;
}
