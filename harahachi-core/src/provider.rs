//! Generative-model provider abstraction.
//!
//! A provider performs exactly one generation call against one named model.
//! Retrying across models is the fallback orchestrator's job, not this
//! layer's, so providers never retry internally.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::types::ImageData;

/// Error type for a single model invocation.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// One generation request: a rendered prompt plus an optional inline image.
///
/// Built fresh per call and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
    pub image: Option<ImageData>,
}

impl GenerateRequest {
    /// Text-only request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
        }
    }

    /// Vision request with an inline image.
    pub fn with_image(prompt: impl Into<String>, image: ImageData) -> Self {
        Self {
            prompt: prompt.into(),
            image: Some(image),
        }
    }
}

/// Trait for generative-AI providers.
///
/// Implementations should be stateless across calls and thread-safe. The
/// provider is responsible for one API call and returning the model's raw
/// text response.
#[async_trait]
pub trait GenerativeProvider: Send + Sync + fmt::Debug {
    /// Invoke a single named model with the given request.
    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<String, ProviderError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;
}
