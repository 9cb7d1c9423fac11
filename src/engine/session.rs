//! Game session
//!
//! A [`Session`] owns the state of the current round and is the only way to
//! change it. The caller submits raw guesses and restarts rounds; everything
//! it reads back is a [`RoundState`] snapshot.

use super::dictionary::{DEFAULT_LOCALE, DictionaryOracle};
use super::validation::{Rejection, validate};
use crate::core::{LetterMultiset, compute_score, normalize_guess, word_points};
use crate::wordlists::loader::normalize_words;
use crate::wordlists::{RootWordSource, SetupError};
use tracing::{debug, info, instrument};

/// State of one round
///
/// Created empty with a fresh root word and replaced wholesale on restart.
/// The score is recomputed from the accepted words whenever they change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    accepted: Vec<String>,
    score: u32,
}

impl RoundState {
    #[must_use]
    pub fn new(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            accepted: Vec::new(),
            score: 0,
        }
    }

    /// The word every guess this round is built from
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.accepted.len()
    }

    /// Letter budget of the root word
    #[must_use]
    pub fn letters(&self) -> LetterMultiset {
        LetterMultiset::from_word(&self.root_word)
    }

    fn accept(&mut self, word: String) {
        self.accepted.insert(0, word);
        self.score = compute_score(&self.accepted);
    }
}

/// A guess that made it through validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The normalized word as recorded
    pub word: String,
    /// Points this word contributed
    pub points: u32,
    /// Round score after accepting it
    pub score: u32,
}

/// A single player's game
///
/// Holds the dictionary, the root word source, the root pool loaded at start
/// and the current round. Sessions share nothing; run one per player.
pub struct Session<D, R> {
    dictionary: D,
    source: R,
    locale: String,
    pool: Vec<String>,
    round: RoundState,
}

impl<D: DictionaryOracle, R: RootWordSource> Session<D, R> {
    /// Load the root pool and begin the first round
    ///
    /// Roots are trimmed and lowercased the same way guesses are, whatever
    /// form the source hands them out in.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the pool cannot be loaded or holds no words.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::engine::{Rejection, Session, WordListDictionary};
    /// use word_scramble::wordlists::WordListRoots;
    ///
    /// let dictionary = WordListDictionary::from_words(["stone", "tones", "notes"]);
    /// let roots = WordListRoots::from_words(["stone"]);
    ///
    /// let mut session = Session::start(dictionary, roots).unwrap();
    /// assert_eq!(session.current_state().root_word(), "stone");
    ///
    /// let accepted = session.submit_guess(" Tones ").unwrap();
    /// assert_eq!(accepted.word, "tones");
    /// assert_eq!(session.submit_guess("tones"), Err(Rejection::AlreadyUsed));
    /// ```
    #[instrument(skip(dictionary, source))]
    pub fn start(dictionary: D, mut source: R) -> Result<Self, SetupError> {
        let pool = normalize_words(source.list_candidate_roots()?);
        if pool.is_empty() {
            return Err(SetupError::EmptyPool);
        }

        let root = normalize_guess(&source.pick_random(&pool));
        info!(pool_size = pool.len(), root = %root, "round started");

        Ok(Self {
            dictionary,
            source,
            locale: DEFAULT_LOCALE.to_string(),
            pool,
            round: RoundState::new(root),
        })
    }

    /// Set the locale passed to the dictionary
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Validate a raw guess and record it if it passes
    ///
    /// The guess is trimmed and lowercased first. On rejection the round is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] for the first validation step that fails.
    #[instrument(skip(self), fields(root = %self.round.root_word))]
    pub fn submit_guess(&mut self, raw: &str) -> Result<Accepted, Rejection> {
        let candidate = normalize_guess(raw);

        validate(
            &candidate,
            &self.round.root_word,
            &self.round.accepted,
            &self.dictionary,
            &self.locale,
        )?;

        let points = word_points(&candidate);
        self.round.accept(candidate.clone());
        info!(word = %candidate, points, score = self.round.score, "guess accepted");

        Ok(Accepted {
            word: candidate,
            points,
            score: self.round.score,
        })
    }

    /// Throw away the current round and start a new one
    ///
    /// The new root is drawn from the same pool and may repeat the old one.
    #[instrument(skip(self), fields(previous = %self.round.root_word))]
    pub fn restart(&mut self) -> &RoundState {
        let root = normalize_guess(&self.source.pick_random(&self.pool));
        debug!(
            found = self.round.found_count(),
            score = self.round.score,
            "discarding round"
        );
        info!(root = %root, "round restarted");

        self.round = RoundState::new(root);
        &self.round
    }
}

impl<D, R> Session<D, R> {
    /// Read-only view of the current round
    #[must_use]
    pub const fn current_state(&self) -> &RoundState {
        &self.round
    }

    /// Root words this session draws from
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dictionary::WordListDictionary;
    use crate::wordlists::WordListRoots;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words([
            "stone", "tones", "notes", "onset", "note", "one", "ten", "set", "silk", "worm", "milk",
            "silkworm", "silkworms", "stones",
        ])
    }

    fn session_with_root(root: &str) -> Session<WordListDictionary, WordListRoots> {
        Session::start(dictionary(), WordListRoots::from_words([root]).with_seed(1)).unwrap()
    }

    #[test]
    fn start_begins_empty_round() {
        let session = session_with_root("stone");
        let state = session.current_state();

        assert_eq!(state.root_word(), "stone");
        assert!(state.accepted_words().is_empty());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn start_fails_on_empty_pool() {
        let result = Session::start(dictionary(), WordListRoots::from_words(["", "  "]));
        assert!(matches!(result, Err(SetupError::EmptyPool)));
    }

    #[test]
    fn start_fails_on_missing_pool() {
        let result = Session::start(dictionary(), WordListRoots::from_file("missing/start.txt"));
        assert!(matches!(result, Err(SetupError::Unavailable { .. })));
    }

    #[test]
    fn stone_scenario() {
        let mut session = session_with_root("stone");

        let first = session.submit_guess("tones").unwrap();
        assert_eq!(first.points, 4);
        assert_eq!(first.score, 4);

        let second = session.submit_guess("notes").unwrap();
        assert_eq!(second.score, 8);

        let state = session.current_state();
        assert_eq!(state.accepted_words(), ["notes", "tones"]);
        assert_eq!(state.score(), 8);
    }

    #[test]
    fn silkworm_scenario() {
        let mut session = session_with_root("silkworm");
        assert_eq!(
            session.submit_guess("silkworms"),
            Err(Rejection::NotConstructibleFromRoot)
        );
        assert_eq!(session.submit_guess("silkworm").unwrap().points, 9);
    }

    #[test]
    fn empty_and_whitespace_guesses_rejected() {
        let mut session = session_with_root("stone");
        let before = session.current_state().clone();

        assert_eq!(session.submit_guess(""), Err(Rejection::EmptyInput));
        assert_eq!(session.submit_guess("   \n"), Err(Rejection::EmptyInput));
        assert_eq!(session.current_state(), &before);
    }

    #[test]
    fn duplicate_guess_rejected() {
        let mut session = session_with_root("stone");
        assert!(session.submit_guess("note").is_ok());
        assert_eq!(session.submit_guess("note"), Err(Rejection::AlreadyUsed));
        assert_eq!(session.submit_guess("  NOTE "), Err(Rejection::AlreadyUsed));
        assert_eq!(session.current_state().found_count(), 1);
    }

    #[test]
    fn unknown_word_rejected() {
        let mut session = session_with_root("stone");
        assert_eq!(session.submit_guess("tonse"), Err(Rejection::NotInDictionary));
    }

    #[test]
    fn rejection_is_repeatable_and_leaves_state_alone() {
        let mut session = session_with_root("stone");
        session.submit_guess("tones").unwrap();
        let before = session.current_state().clone();

        for guess in ["stones", "tonse", "tones", ""] {
            let first = session.submit_guess(guess);
            let after_first = session.current_state().clone();
            let second = session.submit_guess(guess);

            assert!(first.is_err());
            assert_eq!(first, second);
            assert_eq!(after_first, before);
            assert_eq!(session.current_state(), &before);
        }
    }

    #[test]
    fn score_always_matches_accepted_words() {
        let mut session = session_with_root("stone");
        for guess in ["one", "tones", "ten", "bogus", "set", "stone", "one", "onset"] {
            let _ = session.submit_guess(guess);
            let state = session.current_state();
            assert_eq!(state.score(), compute_score(state.accepted_words()));
        }
    }

    #[test]
    fn accepted_words_are_unique() {
        let mut session = session_with_root("stone");
        for guess in ["one", "ONE", "tones", "one ", "tones", "note", "note"] {
            let _ = session.submit_guess(guess);
        }

        let words = session.current_state().accepted_words();
        let mut deduped = words.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), words.len());
    }

    #[test]
    fn accepted_words_are_feasible() {
        let mut session = session_with_root("silkworm");
        for guess in ["silk", "worm", "milk", "stone", "silkworms"] {
            let _ = session.submit_guess(guess);
        }

        let state = session.current_state();
        let letters = state.letters();
        assert_eq!(state.accepted_words(), ["milk", "worm", "silk"]);
        assert!(state.accepted_words().iter().all(|w| letters.can_spell(w)));
    }

    #[test]
    fn restart_clears_round() {
        let mut session = session_with_root("stone");
        session.submit_guess("tones").unwrap();
        session.submit_guess("notes").unwrap();

        let state = session.restart();
        assert!(state.accepted_words().is_empty());
        assert_eq!(state.score(), 0);
        // Single-word pool: the same root comes back, which is allowed.
        assert_eq!(state.root_word(), "stone");

        assert!(session.submit_guess("tones").is_ok());
    }

    struct ShoutingRoots;

    impl RootWordSource for ShoutingRoots {
        fn list_candidate_roots(&self) -> Result<Vec<String>, SetupError> {
            Ok(vec![" Stone ".to_string()])
        }

        fn pick_random(&mut self, pool: &[String]) -> String {
            pool.first().map_or_else(String::new, |root| root.to_uppercase())
        }
    }

    #[test]
    fn mixed_case_roots_are_normalized() {
        let mut session = Session::start(dictionary(), ShoutingRoots).unwrap();
        assert_eq!(session.pool(), ["stone"]);
        assert_eq!(session.current_state().root_word(), "stone");
        assert!(session.submit_guess("Stone").is_ok());

        assert_eq!(session.restart().root_word(), "stone");
        assert!(session.submit_guess("TONES").is_ok());
    }

    #[test]
    fn embedded_dictionary_accepts_everyday_words() {
        let roots = WordListRoots::from_words(["silkworm"]);
        let mut session = Session::start(WordListDictionary::embedded(), roots).unwrap();

        for word in ["risk", "owls", "rims", "mow", "works", "worms", "milks", "swirl", "smirk"] {
            assert!(session.submit_guess(word).is_ok(), "'{word}' was rejected");
        }
        assert_eq!(session.current_state().found_count(), 9);
    }

    #[test]
    fn restart_draws_from_pool() {
        let roots = WordListRoots::from_words(["stone", "silkworm", "notebook"]).with_seed(3);
        let mut session = Session::start(dictionary(), roots).unwrap();

        for _ in 0..10 {
            let root = session.restart().root_word().to_string();
            assert!(session.pool().contains(&root));
        }
    }

    #[test]
    fn locale_is_passed_to_dictionary() {
        let mut session = session_with_root("stone").with_locale("fr");
        assert_eq!(session.locale(), "fr");
        assert_eq!(session.submit_guess("tones"), Err(Rejection::NotInDictionary));
    }

    #[test]
    fn sessions_are_independent() {
        let mut alice = session_with_root("stone");
        let mut bob = session_with_root("stone");

        alice.submit_guess("tones").unwrap();
        assert!(bob.current_state().accepted_words().is_empty());
        assert!(bob.submit_guess("tones").is_ok());
    }
}
