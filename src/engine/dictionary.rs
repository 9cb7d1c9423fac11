//! Dictionary lookups
//!
//! The engine asks a [`DictionaryOracle`] whether a string is a real word. The
//! bundled implementation is a word-list set; anything else (a spell-checking
//! library, a remote service) plugs in behind the same trait.

use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::{load_from_file, normalize_words};
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Language of the bundled dictionary
pub const DEFAULT_LOCALE: &str = "en";

/// Shortest word the word-list dictionary accepts by default
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Answers whether a word is valid in a locale
///
/// Lookups are blocking and must be deterministic for a given
/// `(word, locale)` pair for the lifetime of a session.
pub trait DictionaryOracle {
    /// Return `true` if `word` is a valid word in `locale`
    fn check_word(&self, word: &str, locale: &str) -> bool;
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn check_word(&self, word: &str, locale: &str) -> bool {
        (**self).check_word(word, locale)
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for Box<T> {
    fn check_word(&self, word: &str, locale: &str) -> bool {
        (**self).check_word(word, locale)
    }
}

/// Dictionary backed by an in-memory word list
///
/// Rejects words shorter than its minimum length and any locale whose
/// language subtag differs from its own (`en` serves `en_US` and `en-GB`).
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    min_length: usize,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: DEFAULT_LOCALE.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            words: normalize_words(words).into_iter().collect(),
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::from_words(load_from_file(path)?))
    }

    /// Set the language this dictionary answers for
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the shortest accepted word length
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    fn serves(&self, locale: &str) -> bool {
        locale
            .split(['_', '-'])
            .next()
            .is_some_and(|language| language.eq_ignore_ascii_case(&self.language))
    }
}

impl DictionaryOracle for WordListDictionary {
    fn check_word(&self, word: &str, locale: &str) -> bool {
        if !self.serves(locale) {
            debug!(locale, language = %self.language, "locale not served");
            return false;
        }
        word.chars().count() >= self.min_length && self.words.contains(word)
    }
}

/// A lookup that can fail, such as a call into an external service
pub trait WordLookup {
    type Error: fmt::Display;

    /// Look a word up, reporting whether it is valid
    ///
    /// # Errors
    ///
    /// Returns the lookup's own error when no answer could be produced.
    fn lookup(&self, word: &str, locale: &str) -> Result<bool, Self::Error>;
}

/// Adapts a fallible [`WordLookup`] into a [`DictionaryOracle`]
///
/// A failed lookup is reported as "not a word" and logged.
#[derive(Debug, Clone)]
pub struct NotFoundOnError<L> {
    inner: L,
}

impl<L: WordLookup> NotFoundOnError<L> {
    pub const fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: WordLookup> DictionaryOracle for NotFoundOnError<L> {
    fn check_word(&self, word: &str, locale: &str) -> bool {
        match self.inner.lookup(word, locale) {
            Ok(found) => found,
            Err(e) => {
                warn!(word, locale, error = %e, "dictionary lookup failed, treating as not a word");
                false
            }
        }
    }
}
