//! Normalized edit similarity.
//!
//! Similarity is `1 - indel / (len(a) + len(b))`, where `indel` is the number
//! of single-character insertions and deletions turning `a` into `b` (a
//! substitution counts as one of each). Lengths are in chars. This is the
//! indel ratio computed by [`rapidfuzz::fuzz::ratio`].

use rapidfuzz::fuzz;

/// Normalized similarity in `[0.0, 1.0]`; `1.0` for identical strings,
/// including two empty strings.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    fuzz::ratio(a.chars(), b.chars())
}
