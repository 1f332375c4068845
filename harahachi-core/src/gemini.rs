//! Gemini REST provider.
//!
//! Talks to the `generateContent` endpoint directly with reqwest rather than
//! through an SDK. The request body is `contents` / `parts` with base64
//! `inlineData` for images; the response is a list of candidates whose text
//! parts are concatenated.

use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::AiConfig;
use crate::provider::{GenerateRequest, GenerativeProvider, ProviderError};

/// Gemini API provider.
#[derive(Debug)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl GeminiProvider {
    /// Create a provider from a credential and the shared AI configuration.
    pub fn new(api_key: String, config: &AiConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            client,
            min_interval: Duration::from_millis(config.rate_limit_ms),
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Space successive requests by the configured minimum interval.
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }

    fn build_body(request: &GenerateRequest) -> GenerateContentRequest {
        let mut parts = vec![Part::Text {
            text: request.prompt.clone(),
        }];

        if let Some(image) = &request.image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: base64::engine::general_purpose::STANDARD.encode(&image.data),
                },
            });
        }

        GenerateContentRequest {
            contents: vec![Content { role: None, parts }],
        }
    }
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// Content container used in both requests and responses.
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Untagged union of text and inline media parts. Variant order matters for
/// `#[serde(untagged)]` decoding.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<String, ProviderError> {
        self.rate_limit().await;

        let body = Self::build_body(request);
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(ProviderError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if status != 200 {
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&body) {
                return Err(ProviderError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(ProviderError::ApiError {
                status,
                message: body,
            });
        }

        let response: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(ProviderError::ParseError(
                "No text content in response".to_string(),
            ));
        }

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageData;

    #[test]
    fn test_text_request_body_shape() {
        let body = GeminiProvider::build_body(&GenerateRequest::text("What is this dish?"));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "What is this dish?");
        assert!(json["contents"][0].get("role").is_none());
    }

    #[test]
    fn test_image_request_body_shape() {
        let image = ImageData::jpeg(vec![0xff, 0xd8, 0xff]);
        let body = GeminiProvider::build_body(&GenerateRequest::with_image("Analyze", image));
        let json = serde_json::to_value(&body).unwrap();

        let inline = &json["contents"][0]["parts"][1]["inlineData"];
        assert_eq!(inline["mimeType"], "image/jpeg");
        assert_eq!(inline["data"], "/9j/");
    }

    #[test]
    fn test_response_text_decoding() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "{\"foodName\":\"Ramen\"}"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let parts = response.candidates.into_iter().next().unwrap().content.parts;
        match &parts[0] {
            Part::Text { text } => assert!(text.contains("Ramen")),
            other => panic!("expected text part, got {:?}", other),
        }
    }

    #[test]
    fn test_error_envelope_decoding() {
        let body = r#"{"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        let response: GeminiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.error.message, "Resource has been exhausted");
    }
}
