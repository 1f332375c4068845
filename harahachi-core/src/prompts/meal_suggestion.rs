//! Next-meal suggestion prompt.

use crate::types::{DailyIntake, LoggedMeal, MealSlot};

/// Render the meal-suggestion prompt. `hour` is the local hour of day,
/// passed in so the builder stays pure.
pub fn render_meal_suggestion_prompt(
    slot: MealSlot,
    hour: u32,
    history: &[LoggedMeal],
    intake: &DailyIntake,
) -> String {
    let category = slot.label();

    let history_lines = if history.is_empty() {
        "(no recent meals)".to_string()
    } else {
        history
            .iter()
            .map(|m| format!("- {} ({} kcal)", m.food_name, m.calories))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You are a professional registered dietitian.
It is currently {hour}:00. The user wants a suggestion for **{category}**.
From the user's meal history and today's intake, suggest concretely what to eat for the next {category} to balance out their nutrition.

The user's recent meals:
{history_lines}

Today's intake:
- Total calories: {total_calories} kcal
- P (protein): {protein} g
- F (fat): {fat} g
- C (carbs): {carbs} g
- Target calories: {target_calories} kcal

Suggestion rules:
1. Name a specific menu item fit for {category} and explain in one sentence why it helps.
2. Give exactly 3 suggestions.
3. Output JSON only, in this structure:
{{
  "mealCategory": "{category}",
  "suggestions": [
    {{ "name": "menu item", "reason": "why" }}
  ],
  "advice": "one-sentence overall advice"
}}"#,
        hour = hour,
        category = category,
        history_lines = history_lines,
        total_calories = intake.total_calories,
        protein = intake.macros.protein,
        fat = intake.macros.fat,
        carbs = intake.macros.carbs,
        target_calories = intake.target_calories,
    )
}
