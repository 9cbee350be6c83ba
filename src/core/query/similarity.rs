//! Fuzzy similarity between a search string and an item identifier.

use similar::TextDiff;

/// Similarity ratio in `0..=100`: twice the matched characters over the
/// combined length, rounded.
///
/// Callers lowercase both sides; comparison here is case-sensitive.
pub fn ratio(a: &str, b: &str) -> u8 {
    let diff = TextDiff::from_chars(a, b);
    (diff.ratio() * 100.0).round() as u8
}
