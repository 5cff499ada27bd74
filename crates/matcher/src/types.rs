use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing a matcher or scorer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),
}

/// Similarity metrics between a target and a candidate token sequence.
///
/// Every float lies in `[0.0, 1.0]`. When either sequence is empty all floats
/// are `0.0` and `order_preserved` is `false`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct MatchMetrics {
    /// Target tokens with an exact equal in the candidate, over the longer
    /// sequence length.
    pub token_similarity: f64,
    /// Mean normalized string similarity over every target × candidate pair.
    /// Despite the name this is a similarity, not a distance.
    pub edit_distance: f64,
    /// Target tokens sharing a Double Metaphone code with some candidate
    /// token, over the target length.
    pub phonetic_match: f64,
    /// Target tokens with a nickname-equivalent candidate token, over the
    /// longer sequence length.
    pub nickname_match: f64,
    /// Both sequences are identical, element for element.
    pub order_preserved: bool,
}

impl MatchMetrics {
    /// Metrics for a comparison where one side has no tokens.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Lookup tables for [`Matcher`](crate::Matcher).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatcherConfig {
    /// Canonical name → informal variants. Each entry forms one equivalence
    /// group: every member is a nickname of every other member.
    pub nickname_groups: BTreeMap<String, Vec<String>>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        let groups: [(&str, &[&str]); 6] = [
            ("elizabeth", &["liz", "beth", "betty"]),
            ("william", &["will", "bill"]),
            ("robert", &["rob", "bob"]),
            ("richard", &["rick", "dick"]),
            ("james", &["jim", "jimmy"]),
            ("michael", &["mike", "mick"]),
        ];

        Self {
            nickname_groups: groups
                .into_iter()
                .map(|(name, nicks)| {
                    (
                        name.to_string(),
                        nicks.iter().map(|n| n.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        for (name, nicks) in &self.nickname_groups {
            for member in std::iter::once(name).chain(nicks.iter()) {
                if member.trim().is_empty() {
                    return Err(MatchError::InvalidConfig(format!(
                        "nickname group '{name}' contains an empty name"
                    )));
                }
                if member.chars().any(char::is_whitespace) {
                    return Err(MatchError::InvalidConfig(format!(
                        "nickname '{member}' must be a single token"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Weights and threshold for [`Scorer`](crate::Scorer).
///
/// The weights are designed to sum to 1.0 but are not required to; the
/// combined confidence is clamped to `[0.0, 1.0]` either way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum confidence for a match, in `[0.0, 1.0]`.
    pub confidence_threshold: f64,
    pub token_weight: f64,
    pub nickname_weight: f64,
    pub phonetic_weight: f64,
    pub edit_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.80,
            token_weight: 0.40,
            nickname_weight: 0.35,
            phonetic_weight: 0.15,
            edit_weight: 0.10,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(MatchError::InvalidConfig(
                "confidence_threshold must be between 0.0 and 1.0".into(),
            ));
        }
        let weights = [
            ("token_weight", self.token_weight),
            ("nickname_weight", self.nickname_weight),
            ("phonetic_weight", self.phonetic_weight),
            ("edit_weight", self.edit_weight),
        ];
        for (field, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "{field} must be a finite value >= 0.0"
                )));
            }
        }
        Ok(())
    }

    pub fn weight_sum(&self) -> f64 {
        self.token_weight + self.nickname_weight + self.phonetic_weight + self.edit_weight
    }
}
