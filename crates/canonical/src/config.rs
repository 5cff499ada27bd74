//! Configuration types for the name canonicalization stages.
//!
//! This module defines the three lookup-table configurations consumed by the
//! crate:
//!
//! - [`NormalizeConfig`] drives [`Normalizer`](crate::Normalizer)
//! - [`TokenizeConfig`] drives [`Tokenizer`](crate::Tokenizer)
//! - [`SanitizeConfig`] drives [`Sanitizer`](crate::Sanitizer)
//!
//! Every config is validated once, when the stage is constructed. After that
//! the stage is immutable and its operations cannot fail.
//!
//! # Versioning
//!
//! `NormalizeConfig::version` tracks changes to normalization behavior. Any
//! change that alters the normalized output of an existing input must bump it,
//! so stored normalized names can be told apart from fresh ones.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{NormalizeConfig, TokenizeConfig};
//!
//! let normalize = NormalizeConfig::default();
//! assert_eq!(normalize.version, 1);
//! assert_eq!(normalize.stripped_chars, vec!['-', '\'', '.']);
//!
//! let tokenize = TokenizeConfig::default();
//! assert!(tokenize.compound_prefixes.contains("abdul"));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for [`Normalizer`](crate::Normalizer).
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "prefix_map": { "al": "al", "bin": "bin", "ibn": "ibn" },
///   "stripped_chars": ["-", "'", "."]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Version of the normalization behavior. Must be >= 1.
    pub version: u32,

    /// Whole-token rewrites applied after whitespace collapsing.
    ///
    /// A token is rewritten only when it is exactly equal to a key. The
    /// default table maps each recognized prefix onto itself; it exists so
    /// that alternative spellings (for example `el` → `al`) can be folded in
    /// through configuration rather than code.
    pub prefix_map: BTreeMap<String, String>,

    /// Characters deleted outright, without leaving a space behind.
    ///
    /// With the defaults, `"Al-Rashid"` becomes `"alrashid"` and
    /// `"O'Brien"` becomes `"obrien"`.
    pub stripped_chars: Vec<char>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        let prefix_map = ["al", "ibn", "bin"]
            .into_iter()
            .map(|p| (p.to_string(), p.to_string()))
            .collect();

        Self {
            version: 1,
            prefix_map,
            stripped_chars: vec!['-', '\'', '.'],
        }
    }
}

impl NormalizeConfig {
    /// Checks the invariants the normalizer relies on.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "normalize version must be >= 1".into(),
            ));
        }
        for (from, to) in &self.prefix_map {
            validate_word("prefix_map key", from)?;
            validate_word("prefix_map value", to)?;
        }
        if let Some(ch) = self.stripped_chars.iter().find(|c| c.is_whitespace()) {
            return Err(CanonicalError::InvalidConfig(format!(
                "stripped_chars must not contain whitespace (found {ch:?})"
            )));
        }
        Ok(())
    }
}

/// Configuration for [`Tokenizer`](crate::Tokenizer).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TokenizeConfig {
    /// Tokens that attach to the token that follows them.
    ///
    /// `"abdul rahman"` tokenizes to `["abdulrahman"]` because `abdul` is in
    /// this set.
    pub compound_prefixes: BTreeSet<String>,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            compound_prefixes: ["abdul", "al", "ibn", "bin"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl TokenizeConfig {
    pub fn validate(&self) -> Result<(), CanonicalError> {
        for prefix in &self.compound_prefixes {
            validate_word("compound prefix", prefix)?;
        }
        Ok(())
    }
}

/// Configuration for [`Sanitizer`](crate::Sanitizer).
///
/// Sanitization runs on untrusted text before it reaches the normalizer. The
/// defaults cap input at 500 characters and drop the characters `< > { } \`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SanitizeConfig {
    /// Remove Unicode control characters (C0, DEL and C1).
    pub strip_control_chars: bool,

    /// Maximum length in characters, applied after control stripping.
    pub max_chars: usize,

    /// Characters removed after truncation.
    pub denied_chars: Vec<char>,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            strip_control_chars: true,
            max_chars: 500,
            denied_chars: vec!['<', '>', '{', '}', '\\'],
        }
    }
}

impl SanitizeConfig {
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.max_chars == 0 {
            return Err(CanonicalError::InvalidConfig(
                "max_chars must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

fn validate_word(field: &str, value: &str) -> Result<(), CanonicalError> {
    if value.is_empty() {
        return Err(CanonicalError::InvalidConfig(format!(
            "{field} must not be empty"
        )));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(CanonicalError::InvalidConfig(format!(
            "{field} '{value}' must not contain whitespace"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(NormalizeConfig::default().validate().is_ok());
        assert!(TokenizeConfig::default().validate().is_ok());
        assert!(SanitizeConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn prefix_with_space_rejected() {
        let mut cfg = NormalizeConfig::default();
        cfg.prefix_map.insert("el".into(), "a l".into());
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn whitespace_stripped_char_rejected() {
        let cfg = NormalizeConfig {
            stripped_chars: vec!['-', ' '],
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_compound_prefix_rejected() {
        let mut cfg = TokenizeConfig::default();
        cfg.compound_prefixes.insert(String::new());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_max_chars_rejected() {
        let cfg = SanitizeConfig {
            max_chars: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_deserializes_with_missing_fields() {
        let cfg: NormalizeConfig = serde_json::from_str(r#"{"version": 2}"#).unwrap();
        assert_eq!(cfg.version, 2);
        assert_eq!(cfg.prefix_map, NormalizeConfig::default().prefix_map);
    }
}
