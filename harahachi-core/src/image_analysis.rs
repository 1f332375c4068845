//! Meal-photo analysis task.
//!
//! The only task that never fails: when every model attempt is exhausted (or
//! no credential is configured) it degrades to a deterministic mock analysis
//! so the meal-logging flow keeps working.

use serde::Serialize;
use tracing::warn;

use crate::client::FallbackClient;
use crate::mock;
use crate::prompts::image_analysis::render_image_analysis_prompt;
use crate::provider::GenerateRequest;
use crate::types::{ImageData, MealAnalysis};

/// Confidence reported for a live model result.
const MODEL_CONFIDENCE: f64 = 0.99;

/// How an analysis result was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    /// Produced by the named model.
    Model(String),
    /// Deterministic mock, used when inference was unavailable.
    Mock,
}

/// Result of analyzing a meal photo.
#[derive(Debug, Clone, Serialize)]
pub struct MealAnalysisResult {
    pub analysis: MealAnalysis,
    pub source: AnalysisSource,
    pub confidence: f64,
    /// Why inference degraded to the mock, when it did.
    pub degraded_reason: Option<String>,
}

impl MealAnalysisResult {
    pub fn is_mock(&self) -> bool {
        self.source == AnalysisSource::Mock
    }
}

/// Analyze a meal photo, with an optional user note about the photo
/// ("ate half", "no rice") that overrides what the image shows.
pub async fn analyze_meal_image(
    client: &FallbackClient,
    image: ImageData,
    note: Option<&str>,
) -> MealAnalysisResult {
    let prompt = render_image_analysis_prompt(note);
    let request = GenerateRequest::with_image(prompt, image.clone());

    let failure = match client.generate(client.models(), &request).await {
        Ok(outcome) => match serde_json::from_value::<MealAnalysis>(outcome.value) {
            Ok(analysis) => {
                return MealAnalysisResult {
                    analysis,
                    source: AnalysisSource::Model(outcome.model_used),
                    confidence: MODEL_CONFIDENCE,
                    degraded_reason: None,
                }
            }
            Err(e) => format!("model output did not match the analysis schema: {e}"),
        },
        Err(e) => e.to_string(),
    };

    warn!(error = failure.as_str(), "image analysis degraded to mock result");

    let payload_size = image.data.len();
    MealAnalysisResult {
        analysis: mock::mock_meal_analysis(payload_size),
        source: AnalysisSource::Mock,
        confidence: mock::mock_confidence(payload_size),
        degraded_reason: Some(failure),
    }
}
