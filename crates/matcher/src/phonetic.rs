//! Double Metaphone phonetic codes.

use rphonetic::{DoubleMetaphone, Encoder};
use unicode_normalization::UnicodeNormalization;

/// Primary and alternate Double Metaphone codes for one token.
///
/// Empty codes are stored as `None`; tokens with no letters (digits, symbols)
/// have no codes at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneticCodes {
    pub primary: Option<String>,
    pub alternate: Option<String>,
}

impl PhoneticCodes {
    /// Encodes `token`.
    ///
    /// The encoder only sees the token folded to ASCII letters; a token
    /// with none left has no code.
    pub fn encode(token: &str) -> Self {
        let letters = ascii_letters(token);
        if letters.is_empty() {
            return Self::default();
        }
        let encoder = DoubleMetaphone::default();
        Self {
            primary: non_empty(encoder.encode(&letters)),
            alternate: non_empty(encoder.encode_alternate(&letters)),
        }
    }

    /// True when both tokens have a primary code and any of the four
    /// primary/alternate pairings are equal.
    pub fn shares_code_with(&self, other: &PhoneticCodes) -> bool {
        let (Some(primary), Some(other_primary)) = (&self.primary, &other.primary) else {
            return false;
        };
        primary == other_primary
            || other.alternate.as_ref() == Some(primary)
            || self.alternate.as_ref() == Some(other_primary)
            || matches!((&self.alternate, &other.alternate), (Some(a), Some(b)) if a == b)
    }
}

/// Folds `token` to lowercase ASCII letters: diacritics are decomposed and
/// dropped, a few letters without a decomposition are spelled out, and
/// anything else is removed.
fn ascii_letters(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for ch in token.chars().flat_map(char::to_lowercase) {
        match ch {
            'ç' => out.push('s'),
            'ß' => out.push_str("ss"),
            'æ' => out.push_str("ae"),
            'œ' => out.push_str("oe"),
            'ø' => out.push('o'),
            'đ' | 'ð' => out.push('d'),
            'ł' => out.push('l'),
            'þ' => out.push_str("th"),
            _ => out.extend(
                std::iter::once(ch)
                    .nfd()
                    .filter(char::is_ascii_alphabetic),
            ),
        }
    }
    out
}

fn non_empty(code: String) -> Option<String> {
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}
