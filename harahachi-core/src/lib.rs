//! AI inference core for the Harahachi diet tracker.
//!
//! This crate implements the model-fallback pipeline behind meal logging:
//!
//! - A [`GenerativeProvider`] performs one generation call against one named
//!   model ([`GeminiProvider`] for the real API, [`FakeProvider`] for tests).
//! - [`generate_with_fallback`] tries an ordered model priority list,
//!   accepting the first response from which a JSON object can be extracted.
//! - [`extract_json`] pulls that object out of free-form model text (prose,
//!   thinking preambles, code fences).
//! - When every model fails, or no credential is configured, the image task
//!   degrades to a deterministic mock catalog ([`mock_meal_analysis`]); the
//!   other tasks return task-appropriate degraded values or errors.
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `GEMINI_API_KEY` (optional): API credential; absence disables inference
//! - `HARAHACHI_AI_MODELS` (optional): comma-separated model priority list
//! - `HARAHACHI_AI_COACHING_MODELS` (optional): list for daily evaluation
//! - `HARAHACHI_AI_BASE_URL` (optional): API base URL
//! - `HARAHACHI_AI_RATE_LIMIT_MS` (optional): delay between requests in ms
//! - `HARAHACHI_AI_TIMEOUT_SECS` (optional): per-request timeout
//!
//! # Example
//!
//! ```ignore
//! use harahachi_core::{analyze_meal_image, FallbackClient, ImageData};
//!
//! let client = FallbackClient::from_env()?;
//! let image = ImageData::jpeg(std::fs::read("lunch.jpg")?);
//!
//! let result = analyze_meal_image(&client, image, Some("ate about half")).await;
//! println!("{}: {} kcal", result.analysis.food_name, result.analysis.calories);
//! ```

pub mod client;
pub mod config;
pub mod daily_evaluation;
pub mod error;
pub mod extract;
pub mod fake;
pub mod fallback;
pub mod food_search;
pub mod gemini;
pub mod image_analysis;
pub mod meal_suggestion;
pub mod mock;
pub mod prompts;
pub mod provider;
pub mod recipe_costing;
pub mod recipe_discovery;
pub mod types;

pub use client::FallbackClient;
pub use config::AiConfig;
pub use daily_evaluation::{evaluate_daily_log, DailyEvaluationResult};
pub use error::TaskError;
pub use extract::{extract_json, strip_code_fences, ExtractError};
pub use fake::FakeProvider;
pub use fallback::{generate_with_fallback, FallbackError, FallbackOutcome};
pub use food_search::{search_food, FoodSearchResult};
pub use gemini::GeminiProvider;
pub use image_analysis::{analyze_meal_image, AnalysisSource, MealAnalysisResult};
pub use meal_suggestion::{suggest_next_meal, MealSuggestionResult};
pub use mock::{mock_confidence, mock_meal_analysis};
pub use provider::{GenerateRequest, GenerativeProvider, ProviderError};
pub use recipe_costing::{cost_recipe, RecipeCostingResult};
pub use recipe_discovery::{discover_recipes, RecipeDiscoveryResult};
pub use types::{
    Assessment, DailyEvaluation, DailyIntake, DailyLogSummary, DiscoveredRecipe, FoodAssessment,
    FoodSuggestion, ImageData, LoggedMeal, Macros, MealAnalysis, MealIdea, MealSlot,
    MealSuggestions, RecipeEstimate,
};
