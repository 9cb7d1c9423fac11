//! Guess normalization
//!
//! Raw player input is trimmed and case-folded before any validation runs.

/// Normalize a raw guess
///
/// Strips surrounding whitespace and newlines and lowercases the rest.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize_guess;
///
/// assert_eq!(normalize_guess("  Tones\n"), "tones");
/// assert_eq!(normalize_guess(" \t "), "");
/// ```
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of letters in a word
///
/// Counts characters, not bytes, so accented letters count once.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}
