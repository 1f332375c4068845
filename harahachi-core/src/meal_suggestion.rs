//! Next-meal suggestion task.
//!
//! Never fails: on exhaustion the result carries an empty suggestion list and
//! an advice line explaining that AI advice is unavailable.

use chrono::Timelike;
use serde::Serialize;
use tracing::warn;

use crate::client::FallbackClient;
use crate::prompts::meal_suggestion::render_meal_suggestion_prompt;
use crate::provider::GenerateRequest;
use crate::types::{DailyIntake, LoggedMeal, MealSlot, MealSuggestions};

/// Result of a meal-suggestion request. `model_used` is `None` for the
/// degraded (inference unavailable) shape.
#[derive(Debug, Clone, Serialize)]
pub struct MealSuggestionResult {
    pub suggestions: MealSuggestions,
    pub model_used: Option<String>,
}

/// Suggest what to eat next for the given meal slot.
pub async fn suggest_next_meal(
    client: &FallbackClient,
    slot: MealSlot,
    history: &[LoggedMeal],
    intake: &DailyIntake,
) -> MealSuggestionResult {
    let hour = chrono::Local::now().hour();
    let prompt = render_meal_suggestion_prompt(slot, hour, history, intake);
    let request = GenerateRequest::text(prompt);

    let failure = match client.generate(client.models(), &request).await {
        Ok(outcome) => match serde_json::from_value::<MealSuggestions>(outcome.value) {
            Ok(suggestions) => {
                return MealSuggestionResult {
                    suggestions,
                    model_used: Some(outcome.model_used),
                }
            }
            Err(e) => format!("model output did not match the suggestion schema: {e}"),
        },
        Err(e) => e.to_string(),
    };

    warn!(error = failure.as_str(), "meal suggestion degraded to empty list");

    MealSuggestionResult {
        suggestions: MealSuggestions {
            meal_category: slot.label().to_string(),
            suggestions: vec![],
            advice: format!("AI advice is currently unavailable ({failure})"),
        },
        model_used: None,
    }
}
