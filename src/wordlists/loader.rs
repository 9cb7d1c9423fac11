//! Word list loading utilities
//!
//! Provides functions to read word lists from files or use embedded constants.
//! Every list goes through [`normalize_words`] so roots, dictionary entries
//! and guesses compare in the same form.

use crate::core::normalize_guess;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Trim and lowercase each word, dropping the ones left blank
#[must_use]
pub fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| normalize_guess(word.as_ref()))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Split text into normalized words, one per line
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    normalize_words(content.lines())
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOTS;
///
/// let words = words_from_slice(ROOTS);
/// assert_eq!(words.len(), ROOTS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize_words(slice)
}
