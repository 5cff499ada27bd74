//! Target-name generation through a chat-completions API.
//!
//! The [`NameGenerator`] trait is the seam the HTTP layer depends on;
//! [`OpenAiGenerator`] is the production implementation. Generators only
//! return the name: storing it as the verification target is the caller's
//! job. Requests are bounded by the configured timeout and never retried.
//!
//! ```no_run
//! use generator::{GeneratorConfig, NameGenerator, OpenAiGenerator};
//!
//! # async fn run() -> Result<(), generator::GenerateError> {
//! let generator = OpenAiGenerator::new(GeneratorConfig::default())?;
//! let name = generator.generate("a name for a Moroccan chef").await?;
//! println!("{name}");
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod openai;

pub use crate::config::{GeneratorConfig, API_KEY_ENV};
pub use crate::error::GenerateError;
pub use crate::openai::{build_payload, parse_response, OpenAiGenerator};

use async_trait::async_trait;

/// Produces a single name from a free-text prompt.
#[async_trait]
pub trait NameGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    /// Whether [`generate`](Self::generate) can be attempted at all, e.g.
    /// credentials are present. Used for readiness reporting only.
    fn is_configured(&self) -> bool {
        true
    }
}
