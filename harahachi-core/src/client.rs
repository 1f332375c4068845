//! Client tying configuration, the provider, and the fallback loop together.

use std::sync::Arc;
use tracing::debug;

use crate::config::AiConfig;
use crate::fallback::{self, FallbackError, FallbackOutcome};
use crate::gemini::GeminiProvider;
use crate::provider::{GenerateRequest, GenerativeProvider, ProviderError};

/// Entry point for all inference tasks.
///
/// Holds the model priority lists and, when a credential is configured, the
/// provider. Without a credential every generation request short-circuits to
/// [`FallbackError::NotConfigured`] before any network call. The client is
/// stateless across requests and safe to share between concurrent tasks.
pub struct FallbackClient {
    provider: Option<Arc<dyn GenerativeProvider>>,
    config: AiConfig,
}

impl FallbackClient {
    /// Create a client from environment configuration.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(AiConfig::from_env())
    }

    /// Create a client with the given configuration, wiring up the Gemini
    /// provider when a credential is present.
    pub fn new(config: AiConfig) -> Result<Self, ProviderError> {
        let provider: Option<Arc<dyn GenerativeProvider>> = match &config.api_key {
            Some(key) => Some(Arc::new(GeminiProvider::new(key.clone(), &config)?)),
            None => {
                tracing::warn!(
                    "GEMINI_API_KEY not set; inference disabled, tasks will degrade"
                );
                None
            }
        };

        Ok(Self { provider, config })
    }

    /// Create a client with an explicit provider. Used by tests to inject a
    /// fake provider.
    pub fn with_provider(config: AiConfig, provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            provider: Some(provider),
            config,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Model priority list for most tasks.
    pub fn models(&self) -> &[String] {
        &self.config.models
    }

    /// Stronger-reasoning list for the daily-evaluation task.
    pub fn coaching_models(&self) -> &[String] {
        &self.config.coaching_models
    }

    /// Run the fallback loop over `models` for one request.
    ///
    /// The credential gate lives here so that no provider is ever invoked
    /// without one, regardless of how the client was constructed.
    pub async fn generate(
        &self,
        models: &[String],
        request: &GenerateRequest,
    ) -> Result<FallbackOutcome, FallbackError> {
        if self.config.api_key.is_none() {
            debug!("no credential configured, skipping all model attempts");
            return Err(FallbackError::NotConfigured);
        }

        let Some(provider) = &self.provider else {
            return Err(FallbackError::NotConfigured);
        };

        fallback::generate_with_fallback(provider.as_ref(), models, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeProvider;

    fn keyed_config() -> AiConfig {
        AiConfig {
            api_key: Some("test-key".to_string()),
            ..AiConfig::default()
        }
    }

    #[tokio::test]
    async fn test_no_credential_short_circuits_before_any_call() {
        let fake = Arc::new(FakeProvider::new().with_text("m1", "{}"));
        let client = FallbackClient::with_provider(AiConfig::default(), fake.clone());

        let err = client
            .generate(&["m1".to_string()], &GenerateRequest::text("hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, FallbackError::NotConfigured));
        assert_eq!(fake.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_delegates_to_provider() {
        let fake = Arc::new(FakeProvider::new().with_text("m1", r#"{"ok":true}"#));
        let client = FallbackClient::with_provider(keyed_config(), fake.clone());

        let outcome = client
            .generate(&["m1".to_string()], &GenerateRequest::text("hi"))
            .await
            .unwrap();

        assert_eq!(outcome.model_used, "m1");
        assert_eq!(fake.total_calls(), 1);
    }
}
