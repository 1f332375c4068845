//! Food-search task: nutrition candidates for a text query.

use serde::{Deserialize, Serialize};

use crate::client::FallbackClient;
use crate::error::TaskError;
use crate::prompts::food_search::render_food_search_prompt;
use crate::provider::GenerateRequest;
use crate::types::{FoodSuggestion, LoggedMeal};

/// Response envelope from the model.
#[derive(Debug, Deserialize)]
struct FoodSearchResponse {
    #[serde(default)]
    suggestions: Vec<FoodSuggestion>,
}

/// Result of a food search.
#[derive(Debug, Clone, Serialize)]
pub struct FoodSearchResult {
    pub suggestions: Vec<FoodSuggestion>,
    pub model_used: String,
}

/// Search for food candidates matching `query`, biased by recent history.
pub async fn search_food(
    client: &FallbackClient,
    query: &str,
    history: &[LoggedMeal],
) -> Result<FoodSearchResult, TaskError> {
    let prompt = render_food_search_prompt(query, history);
    let request = GenerateRequest::text(prompt);

    let outcome = client.generate(client.models(), &request).await?;

    let decoded: FoodSearchResponse =
        serde_json::from_value(outcome.value).map_err(|e| TaskError::Decode(e.to_string()))?;

    Ok(FoodSearchResult {
        suggestions: decoded.suggestions,
        model_used: outcome.model_used,
    })
}
