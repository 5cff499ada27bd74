//! Workspace umbrella crate for name verification.
//!
//! This crate stitches together the `canonical` and `matcher` stages behind a
//! single [`Verifier`] that compares a candidate name with the target held by
//! a [`TargetStore`].
//!
//! ```
//! use std::sync::Arc;
//! use namecheck::{InMemoryTargetStore, TargetStore, Verifier, VerifierConfig};
//!
//! let store = Arc::new(InMemoryTargetStore::new());
//! let verifier = Verifier::new(store.clone(), &VerifierConfig::default()).unwrap();
//!
//! store.set_target("Ahmed Al-Rashid".to_string());
//! let result = verifier.verify("Ahmed Al Rashid").unwrap();
//! assert!(result.is_match);
//! ```

pub mod config;
pub mod store;

pub use crate::config::{ConfigLoadError, VerifierConfig, CONFIG_VERSION};
pub use crate::store::{InMemoryTargetStore, TargetStore};
pub use canonical::{
    collapse_whitespace, CanonicalError, NormalizeConfig, Normalizer, SanitizeConfig, Sanitizer,
    TokenizeConfig, Tokenizer,
};
pub use matcher::{
    MatchError, MatchMetrics, Matcher, MatcherConfig, NicknameTable, Scorer, ScoringConfig,
};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised by [`Verifier`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Verification was attempted before any target name was stored.
    #[error("no target name has been set")]
    NoTargetSet,
    #[error(transparent)]
    Canonical(#[from] CanonicalError),
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Outcome of one verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    #[serde(rename = "match")]
    pub is_match: bool,
    /// Weighted confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    pub reason: String,
}

/// Intermediate values of one verification, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub target_normalized: String,
    pub candidate_normalized: String,
    pub target_tokens: Vec<String>,
    pub candidate_tokens: Vec<String>,
    pub metrics: MatchMetrics,
    pub result: VerificationResult,
}

/// Compares candidate names against the stored target.
///
/// All stages are built once in [`Verifier::new`] and are read-only
/// afterwards; the only shared mutable state is the store itself, which is
/// read once per call.
pub struct Verifier {
    store: Arc<dyn TargetStore>,
    normalizer: Normalizer,
    tokenizer: Tokenizer,
    matcher: Matcher,
    scorer: Scorer,
}

impl Verifier {
    pub fn new(store: Arc<dyn TargetStore>, cfg: &VerifierConfig) -> Result<Self, VerifyError> {
        Ok(Self {
            store,
            normalizer: Normalizer::new(cfg.normalize.clone())?,
            tokenizer: Tokenizer::new(cfg.tokenize.clone())?,
            matcher: Matcher::new(&cfg.matcher)?,
            scorer: Scorer::new(cfg.scoring)?,
        })
    }

    pub fn store(&self) -> &Arc<dyn TargetStore> {
        &self.store
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Verify `candidate` against the currently stored target.
    pub fn verify(&self, candidate: &str) -> Result<VerificationResult, VerifyError> {
        let Some(target) = self.store.get_target() else {
            warn!("verification requested with no target set");
            return Err(VerifyError::NoTargetSet);
        };
        Ok(self.verify_pair(&target, candidate))
    }

    /// Verify `candidate` against an explicit `target`, bypassing the store.
    pub fn verify_pair(&self, target: &str, candidate: &str) -> VerificationResult {
        self.explain(target, candidate).result
    }

    /// Run the full pipeline and keep every intermediate value.
    pub fn explain(&self, target: &str, candidate: &str) -> VerificationReport {
        let target_normalized = self.normalizer.normalize(target);
        let candidate_normalized = self.normalizer.normalize(candidate);
        let target_tokens = self.tokenizer.tokenize(&target_normalized);
        let candidate_tokens = self.tokenizer.tokenize(&candidate_normalized);

        let metrics = self
            .matcher
            .compute_similarity(&target_tokens, &candidate_tokens);
        debug!(
            target_tokens = target_tokens.len(),
            candidate_tokens = candidate_tokens.len(),
            token_similarity = metrics.token_similarity,
            edit_distance = metrics.edit_distance,
            phonetic_match = metrics.phonetic_match,
            nickname_match = metrics.nickname_match,
            order_preserved = metrics.order_preserved,
            "computed similarity metrics"
        );

        let confidence = self.scorer.compute_confidence(&metrics);
        let is_match = self.scorer.make_decision(confidence, metrics.order_preserved);
        let reason = self.scorer.generate_reason(is_match, confidence, &metrics);
        info!(is_match, confidence, "verification complete");

        VerificationReport {
            target_normalized,
            candidate_normalized,
            target_tokens,
            candidate_tokens,
            metrics,
            result: VerificationResult {
                is_match,
                confidence,
                reason,
            },
        }
    }
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("normalizer", &self.normalizer)
            .field("tokenizer", &self.tokenizer)
            .field("matcher", &self.matcher)
            .field("scorer", &self.scorer)
            .finish_non_exhaustive()
    }
}
