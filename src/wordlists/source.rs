//! Root word selection
//!
//! A [`RootWordSource`] supplies the pool of root words and picks one for
//! each round.

use super::ROOTS;
use super::loader::{load_from_file, normalize_words, words_from_slice};
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::io;
use std::path::PathBuf;
use tracing::warn;

/// Root word used when asked to pick from an empty pool
pub const FALLBACK_ROOT: &str = "silkworm";

/// A game cannot be set up
///
/// Returned by session start; there is nothing to retry within the session.
#[derive(Debug, Display, Error)]
pub enum SetupError {
    #[display("could not load root words from {}: {source}", path.display())]
    Unavailable { path: PathBuf, source: io::Error },
    #[display("root word pool is empty")]
    EmptyPool,
}

/// Supplies root words for rounds
pub trait RootWordSource {
    /// Load the full pool of candidate roots
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Unavailable`] when the pool cannot be loaded at all.
    fn list_candidate_roots(&self) -> Result<Vec<String>, SetupError>;

    /// Pick one root from `pool`
    ///
    /// Falls back to [`FALLBACK_ROOT`] if `pool` is empty.
    fn pick_random(&mut self, pool: &[String]) -> String;
}

/// Where a [`WordListRoots`] gets its pool from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootOrigin {
    /// The pool compiled into the binary
    Embedded,
    /// A file with one word per line
    File(PathBuf),
    /// An in-memory list
    Words(Vec<String>),
}

/// Root word source over a word list, picking uniformly at random
///
/// Seed it for a reproducible sequence of roots.
#[derive(Debug, Clone)]
pub struct WordListRoots {
    origin: RootOrigin,
    rng: StdRng,
}

impl WordListRoots {
    #[must_use]
    pub fn new(origin: RootOrigin) -> Self {
        Self {
            origin,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Roots compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(RootOrigin::Embedded)
    }

    /// Roots read from `path` when the pool is listed
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(RootOrigin::File(path.into()))
    }

    /// Roots from an in-memory list
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(RootOrigin::Words(words.into_iter().map(Into::into).collect()))
    }

    /// Use a seeded generator so picks are reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub const fn origin(&self) -> &RootOrigin {
        &self.origin
    }
}

impl RootWordSource for WordListRoots {
    fn list_candidate_roots(&self) -> Result<Vec<String>, SetupError> {
        match &self.origin {
            RootOrigin::Embedded => Ok(words_from_slice(ROOTS)),
            RootOrigin::File(path) => load_from_file(path).map_err(|source| SetupError::Unavailable {
                path: path.clone(),
                source,
            }),
            RootOrigin::Words(words) => Ok(normalize_words(words)),
        }
    }

    fn pick_random(&mut self, pool: &[String]) -> String {
        if let Some(root) = pool.choose(&mut self.rng) {
            root.clone()
        } else {
            warn!(fallback = FALLBACK_ROOT, "picking from an empty pool");
            FALLBACK_ROOT.to_string()
        }
    }
}
