//! # Name matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` compares two token sequences produced by the `canonical` crate
//! and turns the comparison into a confidence value and a match decision.
//!
//! ## Core Types
//!
//! - [`Matcher`]: computes [`MatchMetrics`], four independent similarity
//!   measures plus an exact-order flag:
//!   - `token_similarity`: exact token overlap.
//!   - `edit_distance`: mean normalized edit similarity over all token pairs.
//!   - `phonetic_match`: shared Double Metaphone codes.
//!   - `nickname_match`: equivalence through the [`NicknameTable`].
//!   - `order_preserved`: identical sequences.
//! - [`Scorer`]: weighted confidence, threshold decision, reason text.
//! - [`MatcherConfig`] / [`ScoringConfig`]: immutable configuration,
//!   validated when the matcher or scorer is constructed.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Matcher, Scorer};
//!
//! let matcher = Matcher::default();
//! let scorer = Scorer::default();
//!
//! let metrics = matcher.compute_similarity(&["william", "smith"], &["bill", "smith"]);
//! assert_eq!(metrics.nickname_match, 1.0);
//! assert!(!metrics.order_preserved);
//!
//! let confidence = scorer.compute_confidence(&metrics);
//! let is_match = scorer.make_decision(confidence, metrics.order_preserved);
//! assert!(!is_match);
//! println!("{}", scorer.generate_reason(is_match, confidence, &metrics));
//! ```
//!
//! All operations are pure and thread-safe; no metric computation can fail.

mod edit;
pub mod engine;
mod nickname;
mod phonetic;
pub mod scorer;
pub mod types;

pub use crate::edit::edit_similarity;
pub use crate::engine::Matcher;
pub use crate::nickname::NicknameTable;
pub use crate::phonetic::PhoneticCodes;
pub use crate::scorer::Scorer;
pub use crate::types::{MatchError, MatchMetrics, MatcherConfig, ScoringConfig};
