//! Input sanitization for untrusted name and prompt text.
//!
//! The normalizer assumes its input has already been through a [`Sanitizer`].
//! Callers that embed the verifier directly must run one themselves.

use std::collections::HashSet;

use tracing::debug;

use crate::config::SanitizeConfig;
use crate::error::CanonicalError;

/// Strips control characters, caps length, and removes denied characters.
///
/// ```rust
/// use canonical::Sanitizer;
///
/// let sanitizer = Sanitizer::default();
/// assert_eq!(sanitizer.sanitize("Bill\u{0000} <Smith>"), "Bill Smith");
/// ```
#[derive(Debug, Clone)]
pub struct Sanitizer {
    cfg: SanitizeConfig,
    denied: HashSet<char>,
}

impl Sanitizer {
    pub fn new(cfg: SanitizeConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;
        let denied = cfg.denied_chars.iter().copied().collect();
        Ok(Self { cfg, denied })
    }

    pub fn config(&self) -> &SanitizeConfig {
        &self.cfg
    }

    /// Sanitizes `text`.
    ///
    /// The length cap counts characters, not bytes, and applies before the
    /// denylist, so the result may be shorter than `max_chars`.
    pub fn sanitize(&self, text: &str) -> String {
        let strip_control = self.cfg.strip_control_chars;
        let capped: String = text
            .chars()
            .filter(|c| !(strip_control && c.is_control()))
            .take(self.cfg.max_chars)
            .collect();

        let sanitized: String = capped.chars().filter(|c| !self.denied.contains(c)).collect();
        if sanitized.len() != text.len() {
            debug!(
                input_bytes = text.len(),
                output_bytes = sanitized.len(),
                "input sanitized"
            );
        }
        sanitized
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        let cfg = SanitizeConfig::default();
        let denied = cfg.denied_chars.iter().copied().collect();
        Self { cfg, denied }
    }
}
