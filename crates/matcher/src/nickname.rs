//! Symmetric nickname equivalence.
//!
//! The configured groups (`william: will, bill`) are expanded once into a
//! name → group-ids index. Two names are equivalent when they are equal or
//! share at least one group, so `bill ~ william`, `william ~ bill` and
//! `will ~ bill` all hold. A name listed in several groups is equivalent to
//! the members of all of them.

use std::collections::HashMap;

use crate::types::{MatchError, MatcherConfig};

/// Read-only nickname equivalence table, built once and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct NicknameTable {
    groups: HashMap<String, Vec<usize>>,
    group_count: usize,
}

impl NicknameTable {
    /// Builds the table from `cfg.nickname_groups`. Names are lowercased to
    /// line up with normalized tokens.
    pub fn from_config(cfg: &MatcherConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self::from_groups(
            cfg.nickname_groups
                .iter()
                .map(|(name, nicks)| std::iter::once(name).chain(nicks.iter())),
        ))
    }

    /// Builds the table from arbitrary groups of equivalent names.
    pub fn from_groups<G, I, S>(groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (group_id, members) in groups.into_iter().enumerate() {
            for member in members {
                let ids = table
                    .groups
                    .entry(member.as_ref().to_lowercase())
                    .or_default();
                if !ids.contains(&group_id) {
                    ids.push(group_id);
                }
            }
            table.group_count = group_id + 1;
        }
        table
    }

    /// True when `a` and `b` are the same name or nicknames of one another.
    pub fn are_equivalent(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (self.groups.get(a), self.groups.get(b)) {
            (Some(left), Some(right)) => left.iter().any(|id| right.contains(id)),
            _ => false,
        }
    }

    /// Every other name equivalent to `name`, sorted.
    pub fn variants_of(&self, name: &str) -> Vec<&str> {
        let Some(ids) = self.groups.get(name) else {
            return Vec::new();
        };
        let mut variants: Vec<&str> = self
            .groups
            .iter()
            .filter(|(other, other_ids)| {
                other.as_str() != name && other_ids.iter().any(|id| ids.contains(id))
            })
            .map(|(other, _)| other.as_str())
            .collect();
        variants.sort_unstable();
        variants
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Number of equivalence groups.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
