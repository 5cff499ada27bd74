use std::sync::Arc;

use crate::edit::edit_similarity as pair_similarity;
use crate::nickname::NicknameTable;
use crate::phonetic::PhoneticCodes;
use crate::types::{MatchError, MatchMetrics, MatcherConfig};

#[cfg(test)]
mod tests;

/// Computes similarity metrics between two token sequences.
///
/// Holds only the shared, read-only nickname table, so one instance can be
/// used from many threads at once.
#[derive(Debug, Clone)]
pub struct Matcher {
    nicknames: Arc<NicknameTable>,
}

impl Matcher {
    /// Construct a matcher, building the nickname table from `cfg`.
    pub fn new(cfg: &MatcherConfig) -> Result<Self, MatchError> {
        let table = NicknameTable::from_config(cfg)?;
        Ok(Self::with_nicknames(Arc::new(table)))
    }

    /// Construct a matcher over an existing, shared nickname table.
    pub fn with_nicknames(nicknames: Arc<NicknameTable>) -> Self {
        Self { nicknames }
    }

    pub fn nicknames(&self) -> &Arc<NicknameTable> {
        &self.nicknames
    }

    /// Computes all five metrics. Neither input is modified.
    pub fn compute_similarity<S: AsRef<str>>(&self, target: &[S], candidate: &[S]) -> MatchMetrics {
        if target.is_empty() || candidate.is_empty() {
            return MatchMetrics::empty();
        }

        MatchMetrics {
            token_similarity: self.token_similarity(target, candidate),
            edit_distance: self.edit_similarity(target, candidate),
            phonetic_match: self.phonetic_match(target, candidate),
            nickname_match: self.nickname_match(target, candidate),
            order_preserved: self.order_preserved(target, candidate),
        }
    }

    /// Share of target tokens with an exact equal anywhere in the candidate,
    /// over the longer sequence length. A candidate token may satisfy several
    /// target tokens.
    pub fn token_similarity<S: AsRef<str>>(&self, target: &[S], candidate: &[S]) -> f64 {
        self.count_matched(target, candidate, |t, c| t == c)
    }

    /// Mean of [`edit_similarity`](crate::edit_similarity) over the full target × candidate product.
    pub fn edit_similarity<S: AsRef<str>>(&self, target: &[S], candidate: &[S]) -> f64 {
        if target.is_empty() || candidate.is_empty() {
            return 0.0;
        }
        let total: f64 = target
            .iter()
            .flat_map(|t| candidate.iter().map(move |c| pair_similarity(t.as_ref(), c.as_ref())))
            .sum();
        unit(total / (target.len() * candidate.len()) as f64)
    }

    /// Share of target tokens sharing a phonetic code with some candidate
    /// token, over the target length.
    pub fn phonetic_match<S: AsRef<str>>(&self, target: &[S], candidate: &[S]) -> f64 {
        if target.is_empty() || candidate.is_empty() {
            return 0.0;
        }
        let candidate_codes: Vec<PhoneticCodes> = candidate
            .iter()
            .map(|c| PhoneticCodes::encode(c.as_ref()))
            .collect();

        let matched = target
            .iter()
            .filter(|t| {
                let codes = PhoneticCodes::encode(t.as_ref());
                candidate_codes.iter().any(|c| codes.shares_code_with(c))
            })
            .count();
        unit(matched as f64 / target.len() as f64)
    }

    /// Share of target tokens with a nickname-equivalent candidate token
    /// (identity counts), over the longer sequence length.
    pub fn nickname_match<S: AsRef<str>>(&self, target: &[S], candidate: &[S]) -> f64 {
        self.count_matched(target, candidate, |t, c| {
            self.nicknames.are_equivalent(t, c)
        })
    }

    /// Exact element-wise sequence equality. Empty sequences never count.
    pub fn order_preserved<S: AsRef<str>>(&self, target: &[S], candidate: &[S]) -> bool {
        !target.is_empty()
            && target.len() == candidate.len()
            && target
                .iter()
                .zip(candidate)
                .all(|(t, c)| t.as_ref() == c.as_ref())
    }

    fn count_matched<S, F>(&self, target: &[S], candidate: &[S], is_match: F) -> f64
    where
        S: AsRef<str>,
        F: Fn(&str, &str) -> bool,
    {
        if target.is_empty() || candidate.is_empty() {
            return 0.0;
        }
        let matched = target
            .iter()
            .filter(|t| candidate.iter().any(|c| is_match(t.as_ref(), c.as_ref())))
            .count();
        unit(matched as f64 / target.len().max(candidate.len()) as f64)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        let cfg = MatcherConfig::default();
        let table = NicknameTable::from_groups(
            cfg.nickname_groups
                .iter()
                .map(|(name, nicks)| std::iter::once(name).chain(nicks.iter())),
        );
        Self::with_nicknames(Arc::new(table))
    }
}

/// Clamps to `[0.0, 1.0]`.
pub(crate) fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
