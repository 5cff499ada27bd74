use std::collections::BTreeSet;

use crate::config::TokenizeConfig;
use crate::error::CanonicalError;

/// Splits normalized names into name units, merging compound prefixes.
///
/// A token found in the compound-prefix set is concatenated with the token
/// right after it. Merging runs left to right, consumes both tokens, and never
/// revisits an earlier merge, so `"al al rashid"` becomes `["alal", "rashid"]`.
/// A trailing prefix with nothing after it stays as-is.
///
/// ```rust
/// use canonical::Tokenizer;
///
/// let tokenizer = Tokenizer::default();
/// assert_eq!(tokenizer.tokenize("ahmed al rashid"), vec!["ahmed", "alrashid"]);
/// assert_eq!(tokenizer.tokenize("abdul rahman"), vec!["abdulrahman"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    compound_prefixes: BTreeSet<String>,
}

impl Tokenizer {
    pub fn new(cfg: TokenizeConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;
        Ok(Self {
            compound_prefixes: cfg.compound_prefixes,
        })
    }

    pub fn is_compound_prefix(&self, token: &str) -> bool {
        self.compound_prefixes.contains(token)
    }

    /// Tokenizes already-normalized text. Deterministic; empty input yields
    /// an empty sequence.
    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.len() < 2 {
            return words.into_iter().map(str::to_string).collect();
        }

        let mut tokens = Vec::with_capacity(words.len());
        let mut i = 0;
        while i < words.len() {
            match words.get(i + 1) {
                Some(next) if self.is_compound_prefix(words[i]) => {
                    tokens.push(format!("{}{}", words[i], next));
                    i += 2;
                }
                _ => {
                    tokens.push(words[i].to_string());
                    i += 1;
                }
            }
        }
        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            compound_prefixes: TokenizeConfig::default().compound_prefixes,
        }
    }
}
