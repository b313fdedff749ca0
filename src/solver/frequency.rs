//! Letter frequency tables used to rank guesses
//!
//! A letter's frequency is the number of words that contain it at least once,
//! not the number of times it occurs.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Per-letter count of words containing the letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: FxHashMap<u8, usize>,
}

impl LetterFrequency {
    /// Count, for every letter, how many of `words` contain it
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::solver::LetterFrequency;
    ///
    /// let words = [Word::new("speed").unwrap(), Word::new("erase").unwrap()];
    /// let freq = LetterFrequency::from_words(&words);
    ///
    /// assert_eq!(freq.get(b'e'), 2);
    /// assert_eq!(freq.get(b'p'), 1);
    /// assert_eq!(freq.get(b'z'), 0);
    /// ```
    pub fn from_words<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut counts = FxHashMap::default();
        for word in words {
            for letter in word.distinct_letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Drop the given letters from the table
    #[must_use]
    pub fn without(mut self, letters: &BTreeSet<u8>) -> Self {
        self.counts.retain(|letter, _| !letters.contains(letter));
        self
    }

    /// Frequency of `letter`, 0 if it is not in the table
    #[must_use]
    pub fn get(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Check if the word contains at least one letter from the table
    #[must_use]
    pub fn covers_any(&self, word: &Word) -> bool {
        word.chars().iter().any(|letter| self.counts.contains_key(letter))
    }

    /// Sum of `frequency + 1` over the word's distinct letters found in the table
    ///
    /// Letters outside the table add nothing, and a repeated letter counts once.
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        word.distinct_letters()
            .filter_map(|letter| self.counts.get(&letter))
            .map(|count| count + 1)
            .sum()
    }

    /// Score each word and sort by descending score
    ///
    /// The sort is stable, so equal scores keep their input order.
    pub fn rank<'w, I>(&self, words: I) -> Vec<(&'w Word, usize)>
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut ranked: Vec<(&Word, usize)> =
            words.into_iter().map(|word| (word, self.score(word))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn counts_words_not_occurrences() {
        let dictionary = words(&["eerie", "speed", "crane"]);
        let freq = LetterFrequency::from_words(&dictionary);
        assert_eq!(freq.get(b'e'), 3);
        assert_eq!(freq.get(b'r'), 2);
        assert_eq!(freq.get(b's'), 1);
    }

    #[test]
    fn without_removes_letters() {
        let dictionary = words(&["crane", "slate"]);
        let freq = LetterFrequency::from_words(&dictionary);
        let before = freq.len();

        let known: BTreeSet<u8> = [b'a', b'e'].into_iter().collect();
        let freq = freq.without(&known);

        assert_eq!(freq.len(), before - 2);
        assert_eq!(freq.get(b'a'), 0);
        assert_eq!(freq.get(b'c'), 1);
    }

    #[test]
    fn score_sums_distinct_letters() {
        let dictionary = words(&["crane", "slate", "trace"]);
        let freq = LetterFrequency::from_words(&dictionary);
        // c:2 r:2 a:3 n:1 e:3 s:1 l:1 t:2
        assert_eq!(freq.score(&dictionary[0]), 3 + 3 + 4 + 2 + 4);
        assert_eq!(freq.score(&dictionary[1]), 2 + 2 + 4 + 3 + 4);
        assert_eq!(freq.score(&dictionary[2]), 3 + 3 + 4 + 3 + 4);
    }

    #[test]
    fn score_ignores_repeats_and_unknown_letters() {
        let dictionary = words(&["speed"]);
        let freq = LetterFrequency::from_words(&dictionary);
        // e counted once; z, y and x are not in the table
        assert_eq!(freq.score(&Word::new("eerie").unwrap()), 2);
        assert_eq!(freq.score(&Word::new("xyzzy").unwrap()), 0);
    }

    #[test]
    fn covers_any_letter() {
        let dictionary = words(&["crane"]);
        let freq = LetterFrequency::from_words(&dictionary);
        assert!(freq.covers_any(&Word::new("abbey").unwrap()));
        assert!(!freq.covers_any(&Word::new("quilt").unwrap()));
    }

    #[test]
    fn rank_is_stable_for_ties() {
        let dictionary = words(&["crate", "trace", "react", "slate"]);
        let freq = LetterFrequency::from_words(&dictionary);
        let ranked: Vec<&str> = freq
            .rank(&dictionary)
            .into_iter()
            .map(|(word, _)| word.text())
            .collect();
        // the three anagrams tie and keep their order
        assert_eq!(ranked, vec!["crate", "trace", "react", "slate"]);
    }
}
