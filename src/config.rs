//! YAML configuration for the verification pipeline.
//!
//! Every stage section is optional and falls back to its defaults, so an
//! empty document with only a version is a complete configuration.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "default verifier"
//!
//! sanitize:
//!   max_chars: 500
//!   strip_control_chars: true
//!
//! normalize:
//!   version: 1
//!   prefix_map:
//!     al: al
//!     el: al
//!   stripped_chars: ["-", "'", "."]
//!
//! tokenize:
//!   compound_prefixes: [abdul, al, ibn, bin]
//!
//! matcher:
//!   nickname_groups:
//!     william: [will, bill]
//!     margaret: [peggy, maggie]
//!
//! scoring:
//!   confidence_threshold: 0.8
//!   token_weight: 0.4
//!   nickname_weight: 0.35
//!   phonetic_weight: 0.15
//!   edit_weight: 0.1
//! ```

use std::fs;
use std::path::Path;

use canonical::{NormalizeConfig, SanitizeConfig, TokenizeConfig};
use matcher::{MatcherConfig, ScoringConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema version written by [`VerifierConfig::default`].
pub const CONFIG_VERSION: &str = "1.0";

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

impl From<canonical::CanonicalError> for ConfigLoadError {
    fn from(err: canonical::CanonicalError) -> Self {
        ConfigLoadError::Validation(err.to_string())
    }
}

impl From<matcher::MatchError> for ConfigLoadError {
    fn from(err: matcher::MatchError) -> Self {
        ConfigLoadError::Validation(err.to_string())
    }
}

/// Configuration for every stage of the verifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifierConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Input cleanup applied at the boundary, before normalization
    #[serde(default)]
    pub sanitize: SanitizeConfig,

    #[serde(default)]
    pub normalize: NormalizeConfig,

    #[serde(default)]
    pub tokenize: TokenizeConfig,

    /// Nickname groups
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Weights and decision threshold
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl VerifierConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: VerifierConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.sanitize.validate()?;
        self.normalize.validate()?;
        self.tokenize.validate()?;
        self.matcher.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            name: None,
            sanitize: SanitizeConfig::default(),
            normalize: NormalizeConfig::default(),
            tokenize: TokenizeConfig::default(),
            matcher: MatcherConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config = VerifierConfig::from_yaml("version: \"1.0\"\n").unwrap();
        assert_eq!(config, VerifierConfig::default());
    }

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "strict"
sanitize:
  max_chars: 120
normalize:
  prefix_map:
    al: al
    el: al
tokenize:
  compound_prefixes: [abdul, al]
scoring:
  confidence_threshold: 0.9
"#;

        let config = VerifierConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name.as_deref(), Some("strict"));
        assert_eq!(config.sanitize.max_chars, 120);
        assert_eq!(config.normalize.prefix_map.get("el").map(String::as_str), Some("al"));
        assert_eq!(config.normalize.version, 1);
        assert_eq!(config.tokenize.compound_prefixes.len(), 2);
        assert_eq!(config.scoring.confidence_threshold, 0.9);
        assert_eq!(config.scoring.token_weight, 0.40);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1.0"
matcher:
  nickname_groups:
    margaret: [peggy, maggie]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = VerifierConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.matcher.nickname_groups.len(), 1);
        assert!(config.matcher.nickname_groups.contains_key("margaret"));
    }

    #[test]
    fn test_missing_file() {
        let err = VerifierConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigLoadError::FileRead(_)));
    }

    #[test]
    fn test_unsupported_version() {
        let err = VerifierConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = VerifierConfig::from_yaml("version: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigLoadError::YamlParse(_)));
    }

    #[test]
    fn test_stage_validation_errors() {
        let yaml = r#"
version: "1.0"
scoring:
  confidence_threshold: 1.5
"#;
        let err = VerifierConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Validation(_)));

        let yaml = r#"
version: "1.0"
sanitize:
  max_chars: 0
"#;
        let err = VerifierConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Validation(_)));
    }

    #[test]
    fn test_yaml_roundtrip_preserves_config() {
        let config = VerifierConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(VerifierConfig::from_yaml(&yaml).unwrap(), config);
    }
}
