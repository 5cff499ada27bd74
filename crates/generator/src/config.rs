use serde::{Deserialize, Serialize};

use crate::GenerateError;

/// Environment variable consulted when [`GeneratorConfig::api_key`] is unset.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Settings for the chat-completions backed generator.
///
/// # Example
/// ```
/// use generator::GeneratorConfig;
///
/// let cfg = GeneratorConfig {
///     model: "gpt-4o-mini".into(),
///     temperature: 0.2,
///     ..Default::default()
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chat-completions endpoint.
    pub api_url: String,
    pub model: String,
    /// Upper bound on the completion length.
    pub max_tokens: u32,
    /// Sampling temperature, `0.0..=2.0`.
    pub temperature: f32,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Instruction sent as the system message ahead of the user's prompt.
    pub system_prompt: String,
    /// Bearer token. Falls back to `OPENAI_API_KEY` when `None`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".into(),
            model: "gpt-4".into(),
            max_tokens: 50,
            temperature: 0.7,
            timeout_secs: 10,
            system_prompt: "Generate a single name based on the user's prompt. \
                            Return only the name, nothing else."
                .into(),
            api_key: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(GenerateError::InvalidConfig(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }
        if self.model.trim().is_empty() {
            return Err(GenerateError::InvalidConfig("model must not be empty".into()));
        }
        if self.max_tokens == 0 {
            return Err(GenerateError::InvalidConfig(
                "max_tokens must be greater than zero".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(GenerateError::InvalidConfig(
                "temperature must be between 0.0 and 2.0".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(GenerateError::InvalidConfig(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// The configured key, else a non-blank `OPENAI_API_KEY`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("system_prompt", &self.system_prompt)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
