use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::CanonicalError;
use crate::whitespace::collapse_whitespace;

/// Canonicalizes raw name text into a comparable form.
///
/// Steps, in order:
///
/// 1. lowercase
/// 2. Unicode canonical composition (NFC)
/// 3. delete the configured stripped characters (`-`, `'`, `.` by default)
/// 4. collapse whitespace runs and trim
/// 5. rewrite whole tokens found in the prefix table
///
/// ```rust
/// use canonical::Normalizer;
///
/// let normalizer = Normalizer::default();
/// assert_eq!(normalizer.normalize("  Ahmed   Al-Rashid "), "ahmed alrashid");
/// assert_eq!(normalizer.normalize("O'Brien, J.R."), "obrien, jr");
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    cfg: NormalizeConfig,
    stripped: HashSet<char>,
}

impl Normalizer {
    pub fn new(cfg: NormalizeConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;
        let stripped = cfg.stripped_chars.iter().copied().collect();
        Ok(Self { cfg, stripped })
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.cfg
    }

    /// Normalizes `name`. Total: empty input yields an empty string.
    pub fn normalize(&self, name: &str) -> String {
        let lowered = name.to_lowercase();
        let composed: String = lowered
            .nfc()
            .filter(|ch| !self.stripped.contains(ch))
            .collect();
        let collapsed = collapse_whitespace(&composed);
        self.standardize_prefixes(&collapsed)
    }

    fn standardize_prefixes(&self, collapsed: &str) -> String {
        let mut out = String::with_capacity(collapsed.len());
        for token in collapsed.split(' ').filter(|t| !t.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            let mapped = self
                .cfg
                .prefix_map
                .get(token)
                .map(String::as_str)
                .unwrap_or(token);
            out.push_str(mapped);
        }
        out
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        let cfg = NormalizeConfig::default();
        let stripped = cfg.stripped_chars.iter().copied().collect();
        Self { cfg, stripped }
    }
}
