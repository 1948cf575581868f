//! Gemini REST gateway.

use super::types::{
    Content, ErrorWrapper, GenerateContentRequest, GenerateContentResponse, InlineDataPayload,
    Part,
};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use calorie_application::{GatewayError, GenerationRequest, GenerativeGateway};
use calorie_domain::GenerativeModel;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Connection settings for [`GeminiGateway`]
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: GenerativeModel,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: GenerativeModel) -> Self {
        Self {
            api_key: api_key.into(),
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Gateway that talks to the Gemini HTTP API.
pub struct GeminiGateway {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Connection(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Parts in order: user text, optional image, steering prompt.
    fn build_request(request: &GenerationRequest) -> GenerateContentRequest {
        let mut parts = Vec::with_capacity(3);
        if !request.input_text.trim().is_empty() {
            parts.push(Part::Text {
                text: request.input_text.clone(),
            });
        }
        if let Some(image) = &request.image {
            parts.push(Part::InlineData {
                inline_data: InlineDataPayload {
                    mime_type: image.mime_type.as_str().to_string(),
                    data: BASE64_STANDARD.encode(&image.data),
                },
            });
        }
        if !request.prompt.trim().is_empty() {
            parts.push(Part::Text {
                text: request.prompt.clone(),
            });
        }

        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl GenerativeGateway for GeminiGateway {
    fn model(&self) -> &GenerativeModel {
        &self.config.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let body = Self::build_request(request);
        debug!(
            "Gemini request: model={}, parts={}, image={}",
            self.config.model,
            body.contents[0].parts.len(),
            request.image.is_some()
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("{e}")))?;

        extract_text_response(parsed)
    }
}

fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Connection(format!("Gemini API request failed: {err}"))
    }
}

fn map_http_error(status: StatusCode, body: String) -> GatewayError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    GatewayError::Http {
        status: status.as_u16(),
        message,
    }
}

/// Text parts of the first candidate, concatenated in order. Long answers
/// can arrive split over several parts.
fn extract_text_response(response: GenerateContentResponse) -> Result<String, GatewayError> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .filter(|text| !text.trim().is_empty())
        .ok_or(GatewayError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_domain::{ImageMime, ImagePayload};

    #[test]
    fn test_build_request_orders_parts() {
        let request = GenerationRequest::new("what is this?", "analyze calories")
            .with_image(ImagePayload::new(ImageMime::Png, vec![1, 2, 3]));
        let body = serde_json::to_value(GeminiGateway::build_request(&request)).unwrap();

        let parts = &body["contents"][0]["parts"];
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(parts[0]["text"], "what is this?");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "AQID");
        assert_eq!(parts[2]["text"], "analyze calories");
    }

    #[test]
    fn test_build_request_without_image_has_two_parts() {
        let request = GenerationRequest::new("Is pizza healthy?", "Continue...");
        let body = GeminiGateway::build_request(&request);
        assert_eq!(body.contents[0].parts.len(), 2);
    }

    #[test]
    fn test_http_error_uses_api_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let err = map_http_error(StatusCode::BAD_REQUEST, body.to_string());
        match err {
            GatewayError::Http { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "INVALID_ARGUMENT: API key not valid.");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(matches!(
            err,
            GatewayError::Http { status: 502, ref message } if message == "upstream down"
        ));
    }

    #[test]
    fn test_extract_joins_text_parts() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Total "},{"text":"650 kcal"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text_response(parsed).unwrap(), "Total 650 kcal");
    }

    #[test]
    fn test_extract_without_candidates_is_empty_response() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            extract_text_response(parsed),
            Err(GatewayError::EmptyResponse)
        ));
    }
}
