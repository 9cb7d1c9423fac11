//! Letter multiset
//!
//! Counts how many times each letter occurs in a word, so a candidate can be
//! checked against the letter budget of a root word.

use rustc_hash::FxHashMap;
use std::fmt;

/// Letter budget derived from a word
///
/// Maps each letter to the number of times it occurs. Feasibility checks run
/// against a working copy, so the multiset a round holds never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: FxHashMap<char, usize>,
}

impl LetterMultiset {
    /// Build the multiset of letters in `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of unconsumed occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns `false` and leaves the multiset untouched if no occurrence is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&letter);
                true
            }
            None => false,
        }
    }

    /// Check whether `word` can be spelled from these letters
    ///
    /// Walks the word letter by letter, consuming from a working copy and
    /// stopping at the first letter that has run out.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterMultiset;
    ///
    /// let root = LetterMultiset::from_word("silkworm");
    /// assert!(root.can_spell("milk"));
    /// assert!(!root.can_spell("silkworms")); // only one 's'
    /// assert_eq!(root.count('s'), 1);        // root is never consumed
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|letter| remaining.take(letter))
    }

    /// Check whether every letter count here fits within `other`
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .all(|(&letter, &count)| other.count(letter) >= count)
    }
}

impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, usize)> = self.counts.iter().map(|(&l, &c)| (l, c)).collect();
        letters.sort_unstable();

        for (letter, count) in letters {
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let letters = LetterMultiset::from_word("balloon");
        assert_eq!(letters.count('l'), 2);
        assert_eq!(letters.count('o'), 2);
        assert_eq!(letters.count('b'), 1);
        assert_eq!(letters.count('z'), 0);
        assert_eq!(letters.len(), 7);
    }

    #[test]
    fn empty_word_is_empty() {
        let letters = LetterMultiset::from_word("");
        assert!(letters.is_empty());
        assert_eq!(letters.len(), 0);
    }

    #[test]
    fn take_consumes_until_exhausted() {
        let mut letters = LetterMultiset::from_word("aab");
        assert!(letters.take('a'));
        assert!(letters.take('a'));
        assert!(!letters.take('a'));
        assert_eq!(letters.count('b'), 1);
    }

    #[test]
    fn can_spell_respects_counts() {
        let root = LetterMultiset::from_word("stone");
        assert!(root.can_spell("tones"));
        assert!(root.can_spell("notes"));
        assert!(root.can_spell("stone"));
        assert!(!root.can_spell("toots")); // needs two 't' and two 'o'
        assert!(!root.can_spell("stoned"));
    }

    #[test]
    fn can_spell_empty_word() {
        let root = LetterMultiset::from_word("stone");
        assert!(root.can_spell(""));
    }

    #[test]
    fn can_spell_does_not_mutate() {
        let root = LetterMultiset::from_word("silkworm");
        let before = root.clone();
        assert!(root.can_spell("silk"));
        assert!(!root.can_spell("silkworms"));
        assert_eq!(root, before);
    }

    #[test]
    fn can_spell_agrees_with_subset() {
        let root = LetterMultiset::from_word("triangle");
        for candidate in ["tangle", "ringlet", "alert", "tarting", "integral", "giant", "gaggle"] {
            let sub = LetterMultiset::from_word(candidate);
            assert_eq!(
                root.can_spell(candidate),
                sub.is_subset_of(&root),
                "disagreement on '{candidate}'"
            );
        }
    }

    #[test]
    fn display_sorts_letters() {
        let letters = LetterMultiset::from_word("stone");
        assert_eq!(letters.to_string(), "enost");
    }
}
