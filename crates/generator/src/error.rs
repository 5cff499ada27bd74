use thiserror::Error;

/// Errors surfaced by [`NameGenerator::generate`](crate::NameGenerator::generate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Neither the config nor `OPENAI_API_KEY` provide a key.
    #[error("no API key configured (set api_key or OPENAI_API_KEY)")]
    MissingApiKey,
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
    /// Transport failure, including timeouts.
    #[error("request failed: {0}")]
    Request(String),
    /// Non-2xx response from the provider.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// The completion contained no usable text.
    #[error("generated name is empty")]
    EmptyName,
}
