//! Core domain types for Word Scramble
//!
//! This module contains the pure building blocks of the game: letter budgets,
//! guess normalization and scoring. Nothing here performs I/O.

mod letters;
mod score;
mod word;

pub use letters::LetterMultiset;
pub use score::{compute_score, word_points};
pub use word::{letter_count, normalize_guess};
