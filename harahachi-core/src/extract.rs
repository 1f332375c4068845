//! JSON extraction from free-form model output.
//!
//! Models rarely return bare JSON: the object is usually embedded in prose,
//! a thinking preamble, or a markdown code fence. Extraction strips fence
//! markers and then takes the greedy span from the first `{` to the last `}`.
//! The greedy match is deliberate leniency toward verbose output; a
//! balanced-brace scanner would reject some responses this accepts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No JSON object found in model output")]
    NoJsonFound,

    #[error("Extracted span is not valid JSON: {0}")]
    MalformedJson(String),
}

/// Remove markdown code-fence markers (```json ... ```) from model output.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Extract the first brace-delimited JSON object from raw model output.
pub fn extract_json(text: &str) -> Result<serde_json::Value, ExtractError> {
    let stripped = strip_code_fences(text);

    let start = stripped.find('{').ok_or(ExtractError::NoJsonFound)?;
    let end = stripped.rfind('}').ok_or(ExtractError::NoJsonFound)?;
    if end < start {
        return Err(ExtractError::NoJsonFound);
    }

    serde_json::from_str(&stripped[start..=end])
        .map_err(|e| ExtractError::MalformedJson(e.to_string()))
}
