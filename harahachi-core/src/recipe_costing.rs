//! Recipe-costing task: per-serving nutrition from an ingredient list.

use serde::Serialize;

use crate::client::FallbackClient;
use crate::error::TaskError;
use crate::prompts::recipe_costing::render_recipe_costing_prompt;
use crate::provider::GenerateRequest;
use crate::types::RecipeEstimate;

/// Result of costing a recipe.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeCostingResult {
    pub estimate: RecipeEstimate,
    pub model_used: String,
}

/// Estimate per-serving nutrition for a free-text ingredient list.
pub async fn cost_recipe(
    client: &FallbackClient,
    ingredients: &str,
) -> Result<RecipeCostingResult, TaskError> {
    let prompt = render_recipe_costing_prompt(ingredients);
    let request = GenerateRequest::text(prompt);

    let outcome = client.generate(client.models(), &request).await?;

    let estimate: RecipeEstimate =
        serde_json::from_value(outcome.value).map_err(|e| TaskError::Decode(e.to_string()))?;

    Ok(RecipeCostingResult {
        estimate,
        model_used: outcome.model_used,
    })
}
