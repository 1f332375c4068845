//! Recipe-discovery prompt: menu ideas with a recipe-site search query.

/// Render the recipe-discovery prompt.
pub fn render_recipe_discovery_prompt(query: &str) -> String {
    format!(
        r#"You are a cooking assistant.
Based on the user's request "{query}", propose **3** recommended recipes (menu ideas).

Important policy:
- Do not generate detailed instructions or amounts (the user will check an external recipe site).
- Instead, provide the best search keywords for finding the recipe on Google or a recipe site.
- Estimate calories and macros as rough typical values.

Requirements:
1. Propose 3 distinct variations.
2. Output in this JSON format:

{{
  "recipes": [
    {{
      "foodName": "dish name",
      "description": "an appealing short description",
      "ingredients": "(see the linked search results for details)",
      "instructions": [],
      "calories": estimated number,
      "macros": {{ "protein": number, "fat": number, "carbs": number }},
      "sourceQuery": "best search keywords (e.g. pork cabbage miso stir fry recipe popular)"
    }}
  ]
}}"#
    )
}
