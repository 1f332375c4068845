//! Fake generative provider for testing.
//!
//! Responses are scripted per model identifier, so tests can drive the
//! fallback loop deterministically without network access. Every invocation
//! is recorded, letting tests assert which models were (or were not) tried.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::provider::{GenerateRequest, GenerativeProvider, ProviderError};

/// A fake provider with per-model scripted outcomes.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// Map of model identifier -> scripted text or failure message.
    responses: HashMap<String, Result<String, String>>,
    /// Every model invoked, in order.
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    /// Create a provider with no scripted responses; every call fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful raw-text response for a model.
    pub fn with_text(mut self, model: &str, text: &str) -> Self {
        self.responses
            .insert(model.to_string(), Ok(text.to_string()));
        self
    }

    /// Script an invocation failure for a model.
    pub fn with_failure(mut self, model: &str, message: &str) -> Self {
        self.responses
            .insert(model.to_string(), Err(message.to_string()));
        self
    }

    /// How many times a specific model was invoked.
    pub fn call_count(&self, model: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.as_str() == model)
            .count()
    }

    /// Total invocations across all models.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The models invoked so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeProvider for FakeProvider {
    async fn generate(
        &self,
        model: &str,
        _request: &GenerateRequest,
    ) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(model.to_string());

        match self.responses.get(model) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(message)) => Err(ProviderError::RequestFailed(message.clone())),
            None => Err(ProviderError::RequestFailed(format!(
                "FakeProvider: no response configured for model {}",
                model
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_text() {
        let provider = FakeProvider::new().with_text("m1", "{\"ok\":true}");
        let result = provider
            .generate("m1", &GenerateRequest::text("hi"))
            .await
            .unwrap();
        assert_eq!(result, "{\"ok\":true}");
        assert_eq!(provider.call_count("m1"), 1);
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let provider = FakeProvider::new().with_failure("m1", "rate limited");
        let err = provider
            .generate("m1", &GenerateRequest::text("hi"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }

    #[tokio::test]
    async fn test_unscripted_model_fails() {
        let provider = FakeProvider::new();
        let result = provider.generate("mystery", &GenerateRequest::text("hi")).await;
        assert!(result.is_err());
        assert_eq!(provider.total_calls(), 1);
    }
}
