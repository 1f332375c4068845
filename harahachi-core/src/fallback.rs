//! Sequential model-fallback orchestration.
//!
//! Models are tried strictly in priority order; the first attempt whose
//! output yields a parseable JSON object wins and later models are never
//! invoked. Invocation and extraction failures are treated identically:
//! record and move on. Only the last failure survives to the caller when the
//! list is exhausted. The loop is stateless across calls.

use thiserror::Error;
use tracing::{debug, warn};

use crate::extract;
use crate::provider::{GenerateRequest, GenerativeProvider};

#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("No AI credential configured")]
    NotConfigured,

    #[error("No models configured")]
    NoModels,

    #[error("All models failed. Last error from {last_model}: {message}")]
    Exhausted { last_model: String, message: String },
}

/// Successful outcome: the extracted JSON value and the model that produced it.
#[derive(Debug, Clone)]
pub struct FallbackOutcome {
    pub value: serde_json::Value,
    pub model_used: String,
}

/// Try each model in order, returning the first extraction success.
pub async fn generate_with_fallback(
    provider: &dyn GenerativeProvider,
    models: &[String],
    request: &GenerateRequest,
) -> Result<FallbackOutcome, FallbackError> {
    let mut last_failure: Option<(String, String)> = None;

    for model in models {
        debug!(
            model = model.as_str(),
            provider = provider.provider_name(),
            "attempting generation"
        );

        let raw = match provider.generate(model, request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(model = model.as_str(), error = %e, "model invocation failed");
                last_failure = Some((model.clone(), e.to_string()));
                continue;
            }
        };

        match extract::extract_json(&raw) {
            Ok(value) => {
                debug!(model = model.as_str(), "generation succeeded");
                return Ok(FallbackOutcome {
                    value,
                    model_used: model.clone(),
                });
            }
            Err(e) => {
                warn!(model = model.as_str(), error = %e, "extraction failed");
                last_failure = Some((model.clone(), e.to_string()));
            }
        }
    }

    match last_failure {
        Some((last_model, message)) => Err(FallbackError::Exhausted {
            last_model,
            message,
        }),
        None => Err(FallbackError::NoModels),
    }
}
