//! Word Scramble
//!
//! Build as many words as you can from the letters of a root word. Each
//! guess must be new this round, spelled only from the root's letters and
//! found in the dictionary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_scramble::engine::{Session, WordListDictionary};
//! use word_scramble::wordlists::WordListRoots;
//!
//! let mut session = Session::start(WordListDictionary::embedded(), WordListRoots::embedded())?;
//! println!("Root word: {}", session.current_state().root_word());
//!
//! match session.submit_guess("word") {
//!     Ok(accepted) => println!("+{} (score {})", accepted.points, accepted.score),
//!     Err(rejection) => println!("{}", rejection.title()),
//! }
//! # Ok::<(), word_scramble::engine::SetupError>(())
//! ```

// Core domain types
pub mod core;

// Validation, dictionary and session
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;
