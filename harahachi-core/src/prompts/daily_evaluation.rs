//! Daily-log evaluation prompt.

use crate::types::DailyLogSummary;

/// Render the coaching prompt for a full day's log.
pub fn render_daily_evaluation_prompt(summary: &DailyLogSummary) -> String {
    let current_weight = summary
        .current_weight
        .map(|w| format!("{w} kg"))
        .unwrap_or_else(|| "not measured".to_string());
    let target_weight = summary
        .target_weight
        .map(|w| format!("{w} kg"))
        .unwrap_or_else(|| "not set".to_string());
    let target_date = summary
        .target_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "not set".to_string());

    let meal_lines = if summary.meals.is_empty() {
        "(nothing logged)".to_string()
    } else {
        summary
            .meals
            .iter()
            .map(|m| {
                format!(
                    "- {} ({}): {} kcal, P:{}g",
                    m.food_name,
                    m.timestamp.format("%H:%M"),
                    m.calories,
                    m.macros.protein
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let remaining = summary.target_calories - summary.consumed_calories;

    format!(
        r#"You are a professional personal diet coach AI. Based on the user's log and goals for today, give a strict but warm evaluation, a score, and advice.

User status:
- Date: {date}
- Current weight: {current_weight}
- Target weight: {target_weight}
- Target date: {target_date}

Today's intake:
- Target calories: {target_calories} kcal
- Consumed calories: {consumed_calories} kcal
- Remaining calories: {remaining} kcal
- Meals:
{meal_lines}

Tasks:
1. Score (0-100): judge the calorie gap against target, macro balance (especially protein), meal timing, and food quality overall.
   - Deduct for exceeding the target. Also deduct for extreme deficits (metabolic-slowdown risk).
   - Deduct for insufficient protein.
2. Short verdict: one line (e.g. "Excellent discipline!" or "A bit much at late-night snacking").
3. Detailed advice: what concretely to fix, or to keep doing.
4. Per-meal assessment: for each meal, rate it "positive" (good to have eaten), "negative" (better skipped), or "neutral".
   - positive: high protein / low fat, well balanced, appropriate calories.
   - negative: calorie-dense, fatty, sugar-heavy, or nutritionally lopsided.
   - neutral: unremarkable.

Output format (JSON only):
{{
  "score": number,
  "title": "short verdict",
  "advice": "detailed advice (under 300 characters)",
  "foodAssessments": [
    {{ "foodName": "dish name (same string as the input)", "assessment": "positive" | "negative" | "neutral", "reason": "short reason" }}
  ],
  "reasoning": "why this score (not shown to the user, but write it to sharpen the analysis)"
}}"#,
        date = summary.date,
        current_weight = current_weight,
        target_weight = target_weight,
        target_date = target_date,
        target_calories = summary.target_calories,
        consumed_calories = summary.consumed_calories,
        remaining = remaining,
        meal_lines = meal_lines,
    )
}
