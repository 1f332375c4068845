//! Daily-log evaluation task.
//!
//! Uses the coaching model list (stronger reasoning first) rather than the
//! default priority list.

use serde::Serialize;

use crate::client::FallbackClient;
use crate::error::TaskError;
use crate::prompts::daily_evaluation::render_daily_evaluation_prompt;
use crate::provider::GenerateRequest;
use crate::types::{DailyEvaluation, DailyLogSummary};

/// Result of evaluating a day's log.
#[derive(Debug, Clone, Serialize)]
pub struct DailyEvaluationResult {
    pub evaluation: DailyEvaluation,
    pub model_used: String,
}

/// Score and coach a full day's log against the user's goals.
pub async fn evaluate_daily_log(
    client: &FallbackClient,
    summary: &DailyLogSummary,
) -> Result<DailyEvaluationResult, TaskError> {
    let prompt = render_daily_evaluation_prompt(summary);
    let request = GenerateRequest::text(prompt);

    let outcome = client.generate(client.coaching_models(), &request).await?;

    let evaluation: DailyEvaluation =
        serde_json::from_value(outcome.value).map_err(|e| TaskError::Decode(e.to_string()))?;

    Ok(DailyEvaluationResult {
        evaluation,
        model_used: outcome.model_used,
    })
}
