//! Prompt templates for the inference tasks.
//!
//! Each render function is pure. The JSON schema embedded in every prompt is
//! wire contract: downstream decoding depends on those exact key names.

pub mod daily_evaluation;
pub mod food_search;
pub mod image_analysis;
pub mod meal_suggestion;
pub mod recipe_costing;
pub mod recipe_discovery;

pub use daily_evaluation::render_daily_evaluation_prompt;
pub use food_search::render_food_search_prompt;
pub use image_analysis::render_image_analysis_prompt;
pub use meal_suggestion::render_meal_suggestion_prompt;
pub use recipe_costing::render_recipe_costing_prompt;
pub use recipe_discovery::render_recipe_discovery_prompt;
