//! Confidence scoring, match decision and explanation text.
//!
//! The decision requires both `confidence >= threshold` and an exactly
//! preserved token order. Since order preservation means the sequences are
//! identical, nickname, phonetic and reordered candidates can raise the
//! confidence but never produce a match; they still show up in the number
//! and in the reason text.

use tracing::debug;

use crate::engine::unit;
use crate::types::{MatchError, MatchMetrics, ScoringConfig};

/// Applies fixed weights and a threshold to [`MatchMetrics`].
#[derive(Debug, Clone)]
pub struct Scorer {
    cfg: ScoringConfig,
}

impl Scorer {
    pub fn new(cfg: ScoringConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.cfg
    }

    pub fn threshold(&self) -> f64 {
        self.cfg.confidence_threshold
    }

    /// Weighted sum of the four float metrics, clamped to `[0.0, 1.0]`.
    pub fn compute_confidence(&self, metrics: &MatchMetrics) -> f64 {
        let confidence = metrics.token_similarity * self.cfg.token_weight
            + metrics.nickname_match * self.cfg.nickname_weight
            + metrics.phonetic_match * self.cfg.phonetic_weight
            + metrics.edit_distance * self.cfg.edit_weight;
        let confidence = unit(confidence);
        debug!(confidence, "computed confidence");
        confidence
    }

    pub fn make_decision(&self, confidence: f64, order_preserved: bool) -> bool {
        confidence >= self.cfg.confidence_threshold && order_preserved
    }

    /// Human-readable explanation of a decision.
    pub fn generate_reason(&self, is_match: bool, confidence: f64, metrics: &MatchMetrics) -> String {
        if is_match {
            let mut signals = Vec::with_capacity(3);
            if metrics.token_similarity > 0.8 {
                signals.push("high token similarity");
            }
            if metrics.nickname_match > 0.5 {
                signals.push("nickname match");
            }
            if metrics.phonetic_match > 0.5 {
                signals.push("phonetic similarity");
            }
            let detail = if signals.is_empty() {
                "sufficient similarity".to_string()
            } else {
                signals.join(", ")
            };
            return format!("Match (confidence: {confidence:.2}): {detail}");
        }

        if !metrics.order_preserved {
            format!("No match (confidence: {confidence:.2}): token order not preserved")
        } else if confidence < self.cfg.confidence_threshold {
            format!(
                "No match (confidence: {confidence:.2}): below threshold of {:?}",
                self.cfg.confidence_threshold
            )
        } else {
            // Unreachable with the current decision rule; kept for callers
            // that pass their own `is_match`.
            format!("No match (confidence: {confidence:.2}): insufficient similarity")
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            cfg: ScoringConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(token: f64, nickname: f64, phonetic: f64, edit: f64, order: bool) -> MatchMetrics {
        MatchMetrics {
            token_similarity: token,
            edit_distance: edit,
            phonetic_match: phonetic,
            nickname_match: nickname,
            order_preserved: order,
        }
    }

    #[test]
    fn perfect_metrics_give_full_confidence() {
        let scorer = Scorer::default();
        let m = metrics(1.0, 1.0, 1.0, 1.0, true);
        assert_eq!(scorer.compute_confidence(&m), 1.0);
    }

    #[test]
    fn weights_are_applied() {
        let scorer = Scorer::default();
        let m = metrics(0.5, 1.0, 0.5, 0.1, false);
        let expected = 0.5 * 0.40 + 1.0 * 0.35 + 0.5 * 0.15 + 0.1 * 0.10;
        assert!((scorer.compute_confidence(&m) - expected).abs() < 1e-12);
    }

    #[test]
    fn confidence_is_clamped() {
        let scorer = Scorer::new(ScoringConfig {
            token_weight: 2.0,
            ..Default::default()
        })
        .unwrap();
        let m = metrics(1.0, 1.0, 1.0, 1.0, true);
        assert_eq!(scorer.compute_confidence(&m), 1.0);
        assert_eq!(scorer.compute_confidence(&MatchMetrics::empty()), 0.0);
    }

    #[test]
    fn decision_needs_threshold_and_order() {
        let scorer = Scorer::default();
        assert!(scorer.make_decision(0.80, true));
        assert!(scorer.make_decision(1.0, true));
        assert!(!scorer.make_decision(0.79, true));
        assert!(!scorer.make_decision(1.0, false));
    }

    #[test]
    fn match_reason_lists_signals() {
        let scorer = Scorer::default();
        let m = metrics(1.0, 1.0, 1.0, 1.0, true);
        assert_eq!(
            scorer.generate_reason(true, 1.0, &m),
            "Match (confidence: 1.00): high token similarity, nickname match, phonetic similarity"
        );
    }

    #[test]
    fn match_reason_falls_back_to_sufficient_similarity() {
        let scorer = Scorer::default();
        let m = metrics(0.8, 0.5, 0.5, 0.9, true);
        assert_eq!(
            scorer.generate_reason(true, 0.85, &m),
            "Match (confidence: 0.85): sufficient similarity"
        );
    }

    #[test]
    fn order_reason_takes_precedence() {
        let scorer = Scorer::default();
        let m = metrics(1.0, 1.0, 1.0, 0.77, false);
        assert_eq!(
            scorer.generate_reason(false, 0.977, &m),
            "No match (confidence: 0.98): token order not preserved"
        );
    }

    #[test]
    fn threshold_reason_mentions_threshold() {
        let scorer = Scorer::default();
        let m = metrics(0.5, 0.5, 0.5, 0.5, true);
        assert_eq!(
            scorer.generate_reason(false, 0.5, &m),
            "No match (confidence: 0.50): below threshold of 0.8"
        );
    }

    #[test]
    fn whole_number_threshold_keeps_its_decimal() {
        let scorer = Scorer::new(ScoringConfig {
            confidence_threshold: 1.0,
            ..Default::default()
        })
        .unwrap();
        let m = metrics(1.0, 1.0, 1.0, 0.9, true);
        assert_eq!(
            scorer.generate_reason(false, 0.99, &m),
            "No match (confidence: 0.99): below threshold of 1.0"
        );
    }

    #[test]
    fn insufficient_similarity_fallback() {
        let scorer = Scorer::default();
        let m = metrics(1.0, 1.0, 1.0, 1.0, true);
        assert_eq!(
            scorer.generate_reason(false, 0.95, &m),
            "No match (confidence: 0.95): insufficient similarity"
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = ScoringConfig {
            confidence_threshold: -0.1,
            ..Default::default()
        };
        assert!(Scorer::new(cfg).is_err());
    }
}
