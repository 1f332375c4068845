//! Recipe-costing prompt: nutrition per serving from a free-text ingredient list.

/// Render the recipe-costing prompt.
pub fn render_recipe_costing_prompt(ingredients: &str) -> String {
    format!(
        r#"You are a nutrition-calculation expert. From the ingredient list below, compute the nutrition of the whole dish.

Ingredient list:
{ingredients}

Tasks:
1. Interpret the list and infer a common name for the dish.
2. Estimate how many servings the whole list corresponds to (e.g. 300g tofu plus 100g ground pork is roughly 2 servings).
3. Compute calories and macros **per serving** (whole-dish totals divided by the estimated serving count).

Output format (JSON only):
{{
  "foodName": "inferred dish name",
  "calories": per-serving number (kcal, integer),
  "macros": {{ "protein": per-serving number (g), "fat": per-serving number (g), "carbs": per-serving number (g) }},
  "reasoning": "how it was computed (e.g. estimated 2 servings; total XXX kcal / 2 ...)"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_ingredients_and_schema() {
        let prompt = render_recipe_costing_prompt("300g tofu\n100g ground pork\n1 tbsp miso");
        assert!(prompt.contains("300g tofu"));
        assert!(prompt.contains("per serving"));
        assert!(prompt.contains("\"foodName\""));
        assert!(prompt.contains("\"macros\""));
    }
}
