//! Solutions command
//!
//! Finds every dictionary word that can be built from a root word.

use crate::core::{LetterMultiset, compute_score, normalize_guess, word_points};
use crate::engine::{DictionaryOracle, WordListDictionary};
use rayon::prelude::*;

/// One word findable from a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub word: String,
    pub points: u32,
}

/// Every word findable from a root
#[derive(Debug, Clone)]
pub struct SolutionsResult {
    pub root: String,
    /// Highest points first, then alphabetical
    pub solutions: Vec<Solution>,
    /// Score of a round that finds all of them
    pub max_score: u32,
}

impl SolutionsResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.solutions.len()
    }
}

/// List the words a player could find for `root`
///
/// A word qualifies if it passes both the feasibility check and the
/// dictionary check, exactly as a guess would.
///
/// # Errors
///
/// Returns an error if the root is empty after normalization.
pub fn find_solutions(
    root: &str,
    dictionary: &WordListDictionary,
    locale: &str,
) -> Result<SolutionsResult, String> {
    let root = normalize_guess(root);
    if root.is_empty() {
        return Err("Root word is empty".to_string());
    }

    let letters = LetterMultiset::from_word(&root);
    let mut solutions: Vec<Solution> = dictionary
        .words()
        .collect::<Vec<_>>()
        .par_iter()
        .filter(|&&word| letters.can_spell(word) && dictionary.check_word(word, locale))
        .map(|&word| Solution {
            word: word.to_string(),
            points: word_points(word),
        })
        .collect();

    solutions.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.word.cmp(&b.word)));

    let words: Vec<&str> = solutions.iter().map(|s| s.word.as_str()).collect();
    let max_score = compute_score(&words);

    Ok(SolutionsResult {
        root,
        solutions,
        max_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words([
            "stone", "tones", "notes", "onset", "note", "one", "on", "o", "stones", "toast",
        ])
    }

    #[test]
    fn finds_feasible_dictionary_words() {
        let result = find_solutions("stone", &dictionary(), "en").unwrap();
        let words: Vec<&str> = result.solutions.iter().map(|s| s.word.as_str()).collect();

        assert_eq!(
            words,
            vec!["note", "notes", "onset", "stone", "tones", "on", "one"]
        );
    }

    #[test]
    fn max_score_covers_all_solutions() {
        let result = find_solutions("stone", &dictionary(), "en").unwrap();
        assert_eq!(result.count(), 7);
        // five words of four or five letters, two short ones
        assert_eq!(result.max_score, 5 * 4 + 1 + 1);
    }

    #[test]
    fn repeated_letters_respect_root_counts() {
        let dictionary = WordListDictionary::from_words(["noon", "no", "on", "onion", "nun"]);
        let result = find_solutions("noon", &dictionary, "en").unwrap();
        let words: Vec<&str> = result.solutions.iter().map(|s| s.word.as_str()).collect();

        assert_eq!(words, vec!["noon", "no", "on"]);
    }

    #[test]
    fn root_is_normalized() {
        let result = find_solutions("  STONE ", &dictionary(), "en").unwrap();
        assert_eq!(result.root, "stone");
        assert!(!result.solutions.is_empty());
    }

    #[test]
    fn empty_root_is_an_error() {
        assert!(find_solutions("   ", &dictionary(), "en").is_err());
    }

    #[test]
    fn unserved_locale_finds_nothing() {
        let result = find_solutions("stone", &dictionary(), "de").unwrap();
        assert_eq!(result.count(), 0);
        assert_eq!(result.max_score, 0);
    }

    #[test]
    fn embedded_silkworm_has_solutions() {
        let dictionary = WordListDictionary::embedded();
        let result = find_solutions("silkworm", &dictionary, "en").unwrap();

        assert!(result.solutions.iter().any(|s| s.word == "silkworm"));
        assert!(result.solutions.iter().any(|s| s.word == "milk"));
        assert_eq!(result.solutions[0].word, "silkworm");
        assert_eq!(result.solutions[0].points, 9);
    }
}
