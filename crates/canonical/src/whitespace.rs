//! Whitespace collapsing.
//!
//! Names arrive with tabs, doubled spaces, non-breaking spaces and trailing
//! newlines pasted in from forms. [`collapse_whitespace`] folds every run of
//! Unicode whitespace into one ASCII space and trims both ends, so the
//! tokenizer can split on single spaces.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  ahmed \t al\u{00A0}rashid\n"), "ahmed al rashid");
//! ```

/// Collapses runs of whitespace to one space and trims leading and trailing
/// whitespace.
///
/// Empty and whitespace-only input yield an empty string.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("bill\r\n  smith"), "bill smith");
/// assert_eq!(collapse_whitespace("   \n\t "), "");
/// assert_eq!(collapse_whitespace(""), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}
