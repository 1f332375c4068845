//! Food-search prompt.

use crate::types::LoggedMeal;

/// Render the food-search prompt. Recent history biases ranking toward meals
/// the user logs often; unrelated history must be ignored.
pub fn render_food_search_prompt(query: &str, history: &[LoggedMeal]) -> String {
    let history_lines = if history.is_empty() {
        "(no history)".to_string()
    } else {
        history
            .iter()
            .map(|m| format!("- {} ({} kcal)", m.food_name, m.calories))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You are a strict nutrition database. The user searched for "{query}".
Suggest 10 real, highly relevant food candidates.

Personalization:
The user's recent meals:
{history_lines}
- If a history entry matches or is very close to "{query}", rank it near the top (users usually re-log their frequent meals).
- Ignore history entries unrelated to the search.

IMPORTANT: hallucination is forbidden.
- If "{query}" does not exist or is ambiguous, do not fabricate data; suggest common nearby dishes instead.
- If the query names a restaurant menu item, prefer officially published figures.
- If the user searched several foods at once (e.g. "ramen and gyoza"), return strong candidates for each.

Output format (JSON only):
{{
  "suggestions": [
    {{
      "foodName": "exact product or dish name",
      "calories": number (kcal),
      "macros": {{ "protein": number (g), "fat": number (g), "carbs": number (g) }},
      "reasoning": "why this candidate (e.g. from history / official 2024 figures)"
    }}
  ]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Macros;
    use chrono::Utc;

    #[test]
    fn test_render_with_history() {
        let history = vec![LoggedMeal {
            food_name: "Shoyu ramen".to_string(),
            calories: 600.0,
            macros: Macros::default(),
            timestamp: Utc::now(),
        }];
        let prompt = render_food_search_prompt("ramen", &history);
        assert!(prompt.contains("\"ramen\""));
        assert!(prompt.contains("Shoyu ramen (600 kcal)"));
        assert!(prompt.contains("\"suggestions\""));
    }

    #[test]
    fn test_render_without_history() {
        let prompt = render_food_search_prompt("curry", &[]);
        assert!(prompt.contains("(no history)"));
        assert!(prompt.contains("\"foodName\""));
    }
}
