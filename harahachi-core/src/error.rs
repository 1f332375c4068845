//! Errors surfaced by the task-level API.

use thiserror::Error;

use crate::fallback::FallbackError;

/// Terminal error for a task call.
///
/// Per-model failures never appear here individually; they are swallowed by
/// the fallback loop and only the exhaustion summary escapes.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Fallback(#[from] FallbackError),

    #[error("Model output did not match the expected schema: {0}")]
    Decode(String),
}
