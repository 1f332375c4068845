//! Recipe-discovery task: menu ideas with recipe-site search queries.
//!
//! Unlike the other degraded tasks this one propagates its error; callers
//! must handle it themselves.

use serde::{Deserialize, Serialize};

use crate::client::FallbackClient;
use crate::error::TaskError;
use crate::prompts::recipe_discovery::render_recipe_discovery_prompt;
use crate::provider::GenerateRequest;
use crate::types::DiscoveredRecipe;

/// Response envelope from the model.
#[derive(Debug, Deserialize)]
struct RecipeDiscoveryResponse {
    #[serde(default)]
    recipes: Vec<DiscoveredRecipe>,
}

/// Result of a recipe-discovery request.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDiscoveryResult {
    pub recipes: Vec<DiscoveredRecipe>,
    pub model_used: String,
}

/// Discover recipe ideas matching a free-text request.
pub async fn discover_recipes(
    client: &FallbackClient,
    query: &str,
) -> Result<RecipeDiscoveryResult, TaskError> {
    let prompt = render_recipe_discovery_prompt(query);
    let request = GenerateRequest::text(prompt);

    let outcome = client.generate(client.models(), &request).await?;

    let decoded: RecipeDiscoveryResponse =
        serde_json::from_value(outcome.value).map_err(|e| TaskError::Decode(e.to_string()))?;

    Ok(RecipeDiscoveryResult {
        recipes: decoded.recipes,
        model_used: outcome.model_used,
    })
}
