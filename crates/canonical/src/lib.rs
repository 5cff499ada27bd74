//! Name canonicalization layer.
//!
//! This crate turns user-supplied name text into token sequences that the
//! matcher can compare. Three stages live here:
//!
//! - [`Sanitizer`]: strips control characters, caps length, drops a small
//!   denylist of characters. Runs on untrusted input at the boundary.
//! - [`Normalizer`]: lowercase, NFC, punctuation removal, whitespace
//!   collapsing, prefix standardization.
//! - [`Tokenizer`]: whitespace split plus compound-prefix merging
//!   (`"al rashid"` → `"alrashid"`).
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale. Each stage is built once from its config and
//! is immutable afterwards, so a single instance can be shared across threads.
//!
//! ```rust
//! use canonical::{Normalizer, Tokenizer};
//!
//! let normalizer = Normalizer::default();
//! let tokenizer = Tokenizer::default();
//!
//! let hyphenated = tokenizer.tokenize(&normalizer.normalize("Ahmed Al-Rashid"));
//! let spaced = tokenizer.tokenize(&normalizer.normalize("Ahmed Al Rashid"));
//! assert_eq!(hyphenated, spaced);
//! assert_eq!(spaced, vec!["ahmed", "alrashid"]);
//! ```

mod config;
mod error;
mod normalize;
mod sanitize;
mod token;
mod whitespace;

pub use crate::config::{NormalizeConfig, SanitizeConfig, TokenizeConfig};
pub use crate::error::CanonicalError;
pub use crate::normalize::Normalizer;
pub use crate::sanitize::Sanitizer;
pub use crate::token::Tokenizer;
pub use crate::whitespace::collapse_whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(raw: &str) -> Vec<String> {
        let sanitizer = Sanitizer::default();
        let normalizer = Normalizer::default();
        let tokenizer = Tokenizer::default();
        tokenizer.tokenize(&normalizer.normalize(&sanitizer.sanitize(raw)))
    }

    #[test]
    fn punctuation_variants_tokenize_identically() {
        assert_eq!(pipeline("Ahmed Al-Rashid"), pipeline("ahmed al rashid"));
        assert_eq!(pipeline("Ahmed Al-Rashid"), pipeline("AHMED  AL.RASHID"));
    }

    #[test]
    fn compound_name_is_single_token() {
        assert_eq!(pipeline("Abdul Rahman"), vec!["abdulrahman"]);
    }

    #[test]
    fn sanitized_markup_does_not_leak_into_tokens() {
        assert_eq!(pipeline("<b>Bill</b> Smith"), vec!["bbill/b", "smith"]);
    }

    #[test]
    fn whitespace_only_yields_no_tokens() {
        assert!(pipeline(" \t\n ").is_empty());
    }
}
