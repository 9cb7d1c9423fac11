//! Word lists for Word Scramble
//!
//! Provides the embedded root pool and dictionary compiled into the binary,
//! loaders for custom lists, and the [`RootWordSource`] rounds draw from.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOTS, ROOTS_COUNT};
pub use source::{FALLBACK_ROOT, RootOrigin, RootWordSource, SetupError, WordListRoots};
