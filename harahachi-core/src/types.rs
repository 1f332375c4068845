//! Shared request and result types for AI inference tasks.
//!
//! The structs here mirror the wire contract with the model: field names are
//! camelCase on the wire and must not be renamed, because the prompts instruct
//! the model to emit exactly these keys.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// An image payload sent inline with a vision request.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImageData {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    pub fn jpeg(data: Vec<u8>) -> Self {
        Self::new(data, "image/jpeg")
    }

    pub fn png(data: Vec<u8>) -> Self {
        Self::new(data, "image/png")
    }
}

/// Macronutrient grams. All values are non-negative; see [`lenient_non_negative`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub carbs: f64,
}

impl Macros {
    pub fn new(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            protein,
            fat,
            carbs,
        }
    }
}

/// Result of analyzing a meal photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysis {
    #[serde(default)]
    pub food_name: String,
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub calories: f64,
    #[serde(default)]
    pub macros: Macros,
    #[serde(default)]
    pub breakdown: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

/// A single candidate from the food-search task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSuggestion {
    #[serde(default)]
    pub food_name: String,
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub calories: f64,
    #[serde(default)]
    pub macros: Macros,
    #[serde(default)]
    pub reasoning: String,
}

/// Per-meal verdict in a daily evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Assessment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

// The model occasionally emits verdicts outside the requested vocabulary
// (or omits the field); anything unrecognized reads as Neutral.
impl<'de> Deserialize<'de> for Assessment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("positive") => Assessment::Positive,
            Some("negative") => Assessment::Negative,
            _ => Assessment::Neutral,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAssessment {
    #[serde(default)]
    pub food_name: String,
    #[serde(default)]
    pub assessment: Assessment,
    #[serde(default)]
    pub reason: String,
}

/// Coach-style evaluation of a full day's log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEvaluation {
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub score: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub advice: String,
    #[serde(default)]
    pub food_assessments: Vec<FoodAssessment>,
    #[serde(default)]
    pub reasoning: String,
}

/// Per-serving nutrition estimate computed from an ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeEstimate {
    #[serde(default)]
    pub food_name: String,
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub calories: f64,
    #[serde(default)]
    pub macros: Macros,
    #[serde(default)]
    pub reasoning: String,
}

/// One suggested menu item for the next meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealIdea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub reason: String,
}

/// Suggestions for what to eat next.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestions {
    #[serde(default)]
    pub meal_category: String,
    #[serde(default)]
    pub suggestions: Vec<MealIdea>,
    #[serde(default)]
    pub advice: String,
}

/// A recipe idea from the discovery task. Instead of full instructions the
/// model supplies `source_query`, a search-engine query for recipe sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredRecipe {
    #[serde(default)]
    pub food_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub calories: f64,
    #[serde(default)]
    pub macros: Macros,
    #[serde(default)]
    pub source_query: String,
}

/// A meal the user already logged, used as prompt context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedMeal {
    pub food_name: String,
    pub calories: f64,
    #[serde(default)]
    pub macros: Macros,
    pub timestamp: DateTime<Utc>,
}

/// Running totals for today, used by the meal-suggestion task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyIntake {
    pub total_calories: f64,
    #[serde(default)]
    pub macros: Macros,
    pub target_calories: f64,
}

/// A full day's log plus goals, input to the daily-evaluation task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLogSummary {
    pub date: NaiveDate,
    pub consumed_calories: f64,
    pub target_calories: f64,
    #[serde(default)]
    pub meals: Vec<LoggedMeal>,
    #[serde(default)]
    pub current_weight: Option<f64>,
    #[serde(default)]
    pub target_weight: Option<f64>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

/// Which meal the user wants a suggestion for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "breakfast" => Some(MealSlot::Breakfast),
            "lunch" => Some(MealSlot::Lunch),
            "dinner" => Some(MealSlot::Dinner),
            "snack" => Some(MealSlot::Snack),
            _ => None,
        }
    }
}

/// Decode a calorie or macro field leniently: numbers pass through, numeric
/// strings are parsed, anything else (missing, null, prose) becomes 0.0.
/// Negative and non-finite values clamp to 0.0 to uphold the non-negativity
/// invariant rather than guessing at what the model meant.
pub(crate) fn lenient_non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_non_negative(&value))
}

fn coerce_non_negative(value: &serde_json::Value) -> f64 {
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if number.is_finite() && number > 0.0 {
        number
    } else {
        0.0
    }
}
