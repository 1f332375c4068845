//! Meal-photo analysis prompt.

/// Render the image-analysis prompt. The optional user note overrides what
/// the image appears to show (e.g. "ate half" must halve the calories).
pub fn render_image_analysis_prompt(note: Option<&str>) -> String {
    let note_section = match note {
        Some(note) if !note.trim().is_empty() => format!(
            "The user says about this photo: \"{note}\"\n\n\
             IMPORTANT: the user's note takes priority over the image. If the note says half \
             was eaten, reduce the calories by 50% even if the plate looks full. If it says \
             \"no rice\", exclude the rice carbohydrates even if rice is visible."
        ),
        _ => "None.".to_string(),
    };

    format!(
        r#"You are a world-class nutrition analysis AI. Analyze the attached meal photo deeply and logically.

User note about the photo:
{note_section}

First, reason step by step:
- identify the dish
- apply the user's note (show the adjustment arithmetic when a note is given)
- estimate the portion size

Then output the result in exactly this JSON format:

{{
  "foodName": "name of the dish",
  "calories": number,
  "macros": {{ "protein": number, "fat": number, "carbs": number }},
  "breakdown": ["ingredient A", "ingredient B"],
  "reasoning": "a user-facing summary of the analysis, mentioning how the note was applied"
}}"#
    )
}
