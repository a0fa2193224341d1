//! Pure per-step transforms used by the normalization pipeline.
//!
//! Each function implements exactly one pipeline step over a borrowed input
//! and returns the transformed string.
//! [`TextNormalizer::transform`](crate::TextNormalizer::transform) composes
//! them in its fixed order; they are exported for callers that need a single
//! step without running the whole pipeline.
//!
//! All of these are deterministic, allocate at most one output string, and
//! run in a single pass over the input.

use crate::config::LengthBounds;

/// Removes every ASCII decimal digit.
///
/// Digits embedded in alphanumeric tokens are deleted without inserting a
/// separator, so `"ab12cd"` becomes `"abcd"`.
///
/// ```
/// use txtnorm::strip_digits;
///
/// assert_eq!(strip_digits("room 404, floor 3"), "room , floor ");
/// assert_eq!(strip_digits("ab12cd"), "abcd");
/// ```
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_ascii_digit()).collect()
}

/// Replaces every maximal run of non-ASCII code points with a single ASCII
/// space.
///
/// The run collapsing means `"naïve"` and `"na\u{00EF}\u{00EF}ve"` both
/// come out as `"na ve"`.
///
/// ```
/// use txtnorm::mask_non_ascii;
///
/// assert_eq!(mask_non_ascii("héllo"), "h llo");
/// assert_eq!(mask_non_ascii("a→→→b"), "a b");
/// ```
pub fn mask_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push(' ');
            in_run = true;
        }
    }
    out
}

/// Drops the 32 ASCII punctuation characters, keeping everything else
/// (including whitespace) verbatim.
///
/// ```
/// use txtnorm::strip_punctuation;
///
/// assert_eq!(strip_punctuation("it's done!"), "its done");
/// ```
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_ascii_punctuation()).collect()
}

/// Keeps only whitespace-separated words whose character count satisfies
/// `min < chars < max`, rejoined with single spaces.
///
/// Original inter-word spacing is discarded; both bounds are strict.
///
/// ```
/// use txtnorm::{filter_by_length, LengthBounds};
///
/// let bounds = LengthBounds { min: 2, max: 5 };
/// assert_eq!(filter_by_length("a bb ccc dddd eeeee", bounds), "ccc dddd");
/// ```
pub fn filter_by_length(text: &str, bounds: LengthBounds) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if len > bounds.min && len < bounds.max {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}
