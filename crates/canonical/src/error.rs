use thiserror::Error;

/// Errors raised while constructing a canonicalization stage.
///
/// Normalization, tokenization and sanitization themselves are total; only an
/// invalid configuration can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
