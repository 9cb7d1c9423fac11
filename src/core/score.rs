//! Length-based scoring
//!
//! A round's score is always recomputed from the full list of accepted words.

use super::word::letter_count;

/// Points one accepted word is worth
///
/// Every word earns 1 point. On top of that an eight-letter word earns 8,
/// otherwise a word longer than five letters earns 5 and a word longer than
/// three earns 3. The bonuses are alternatives, so eight letters gives 9.
#[must_use]
pub fn word_points(word: &str) -> u32 {
    let len = letter_count(word);
    let bonus = if len == 8 {
        8
    } else if len > 5 {
        5
    } else if len > 3 {
        3
    } else {
        0
    };
    1 + bonus
}

/// Total score for a list of accepted words
///
/// Order does not matter and there is no running total to drift from the list.
///
/// # Examples
/// ```
/// use word_scramble::core::compute_score;
///
/// assert_eq!(compute_score(&["tones", "notes"]), 8);
/// assert_eq!(compute_score(&["silkworm"]), 9);
/// assert_eq!(compute_score::<&str>(&[]), 0);
/// ```
#[must_use]
pub fn compute_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|word| word_points(word.as_ref())).sum()
}
