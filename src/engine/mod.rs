//! Word Scramble engine
//!
//! Validation, dictionary lookups and the session that ties them to a round.

pub mod dictionary;
mod session;
pub mod validation;

pub use crate::wordlists::SetupError;
pub use dictionary::{
    DEFAULT_LOCALE, DEFAULT_MIN_LENGTH, DictionaryOracle, NotFoundOnError, WordListDictionary,
    WordLookup,
};
pub use session::{Accepted, RoundState, Session};
pub use validation::{Rejection, is_original, is_possible, is_real, validate};
