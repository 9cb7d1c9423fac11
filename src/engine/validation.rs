//! Guess validation
//!
//! Three independent predicates decide whether a normalized guess is
//! accepted. [`validate`] runs them in a fixed order and stops at the first
//! failure, so the rejection always names the first rule that was broken and
//! the dictionary is only consulted for guesses that pass the cheaper checks.

use super::dictionary::DictionaryOracle;
use crate::core::LetterMultiset;
use derive_more::{Display, Error};
use tracing::debug;

/// Why a guess was turned down
///
/// Each variant maps to one step of the validation pipeline. A rejection
/// never changes the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum Rejection {
    #[display("guess is empty")]
    EmptyInput,
    #[display("word has already been used this round")]
    AlreadyUsed,
    #[display("word cannot be built from the root word's letters")]
    NotConstructibleFromRoot,
    #[display("word is not in the dictionary")]
    NotInDictionary,
}

impl Rejection {
    /// Short title suitable for an alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::EmptyInput => "Nothing Entered",
            Self::AlreadyUsed => "Already Used!",
            Self::NotConstructibleFromRoot => "Not Possible",
            Self::NotInDictionary => "Not a Word",
        }
    }

    /// Explanation shown under the title
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::EmptyInput => "Type a word first".to_string(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotConstructibleFromRoot => {
                format!("Not possible to make that word from {root_word}")
            }
            Self::NotInDictionary => "That's not an actual word ...".to_string(),
        }
    }
}

/// Check that `candidate` has not been accepted yet this round
#[must_use]
pub fn is_original<S: AsRef<str>>(candidate: &str, accepted: &[S]) -> bool {
    !accepted.iter().any(|word| word.as_ref() == candidate)
}

/// Check that `candidate` can be built from the letters of `root_word`
///
/// Each letter of the root may be used at most as often as it appears.
#[must_use]
pub fn is_possible(candidate: &str, root_word: &str) -> bool {
    LetterMultiset::from_word(root_word).can_spell(candidate)
}

/// Ask the dictionary whether `candidate` is a real word
///
/// The root word itself gets no special treatment either way.
#[must_use]
pub fn is_real<D: DictionaryOracle + ?Sized>(candidate: &str, dictionary: &D, locale: &str) -> bool {
    dictionary.check_word(candidate, locale)
}

/// Run the full pipeline on an already normalized guess
///
/// Order: empty input, originality, feasibility, dictionary.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first check that fails.
pub fn validate<S, D>(
    candidate: &str,
    root_word: &str,
    accepted: &[S],
    dictionary: &D,
    locale: &str,
) -> Result<(), Rejection>
where
    S: AsRef<str>,
    D: DictionaryOracle + ?Sized,
{
    let rejection = if candidate.is_empty() {
        Some(Rejection::EmptyInput)
    } else if !is_original(candidate, accepted) {
        Some(Rejection::AlreadyUsed)
    } else if !is_possible(candidate, root_word) {
        Some(Rejection::NotConstructibleFromRoot)
    } else if !is_real(candidate, dictionary, locale) {
        Some(Rejection::NotInDictionary)
    } else {
        None
    };

    match rejection {
        Some(reason) => {
            debug!(candidate, root_word, %reason, "guess rejected");
            Err(reason)
        }
        None => Ok(()),
    }
}
