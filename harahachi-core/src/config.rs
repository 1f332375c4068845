//! AI configuration from environment variables.

use std::env;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Models to try in order of preference for most tasks.
pub const DEFAULT_MODELS: &[&str] = &[
    "gemini-3-flash-preview",
    "gemini-2.0-flash-exp",
    "gemini-1.5-pro",
    "gemini-flash-latest",
];

/// Stronger-reasoning list used for daily-log coaching.
pub const DEFAULT_COACHING_MODELS: &[&str] = &[
    "gemini-1.5-pro",
    "gemini-2.0-flash-exp",
    "gemini-flash-latest",
];

/// Default minimum interval between provider requests in milliseconds.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 500;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// AI client configuration.
///
/// A missing credential is a valid, handled state: the client then skips all
/// network attempts and returns degraded responses.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Gemini API key, if configured.
    pub api_key: Option<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Model priority list for most tasks.
    pub models: Vec<String>,
    /// Model priority list for the daily-evaluation task.
    pub coaching_models: Vec<String>,
    /// Minimum milliseconds between requests.
    pub rate_limit_ms: u64,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            models: default_list(DEFAULT_MODELS),
            coaching_models: default_list(DEFAULT_COACHING_MODELS),
            rate_limit_ms: DEFAULT_RATE_LIMIT_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `GEMINI_API_KEY`: API credential (optional; absence disables inference)
    /// - `HARAHACHI_AI_BASE_URL`: API base URL
    /// - `HARAHACHI_AI_MODELS`: comma-separated model priority list
    /// - `HARAHACHI_AI_COACHING_MODELS`: comma-separated list for daily evaluation
    /// - `HARAHACHI_AI_RATE_LIMIT_MS`: minimum delay between requests in ms
    /// - `HARAHACHI_AI_TIMEOUT_SECS`: per-request timeout in seconds
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());

        let base_url =
            env::var("HARAHACHI_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let models = env::var("HARAHACHI_AI_MODELS")
            .ok()
            .map(|raw| parse_model_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| default_list(DEFAULT_MODELS));

        let coaching_models = env::var("HARAHACHI_AI_COACHING_MODELS")
            .ok()
            .map(|raw| parse_model_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| default_list(DEFAULT_COACHING_MODELS));

        let rate_limit_ms = env::var("HARAHACHI_AI_RATE_LIMIT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT_MS);

        let timeout_secs = env::var("HARAHACHI_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            base_url,
            models,
            coaching_models,
            rate_limit_ms,
            timeout_secs,
        }
    }
}

fn default_list(models: &[&str]) -> Vec<String> {
    models.iter().map(|m| m.to_string()).collect()
}

/// Parse a comma-separated model list, trimming whitespace and dropping
/// empty entries.
pub fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
