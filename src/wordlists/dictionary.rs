//! The shared dictionary
//!
//! An ordered, duplicate-free list of valid guesses. Built once and then only
//! read: it backs both guess validation and suggestion.

use super::embedded::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// Ordered list of valid five-letter words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    /// Word text to its position in `words`
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of any repeated word
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut index = FxHashMap::default();
        let mut kept = Vec::new();
        for word in words {
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), kept.len());
                kept.push(word);
            }
        }
        Self { words: kept, index }
    }

    /// Build from string slices, skipping anything that is not a valid word
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::from_words(words_from_slice(slice))
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(WORDS)
    }

    /// Load a dictionary file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::from_words)
    }

    /// All words, in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership, ignoring case
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_slice(&["crane", "slate"]);
    /// assert!(dictionary.contains("CRANE"));
    /// assert!(!dictionary.contains("trace"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&word.to_ascii_lowercase())
    }

    /// The dictionary's own entry for `word`, if present
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.index
            .get(&word.to_ascii_lowercase())
            .map(|&position| &self.words[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_keeps_order_and_drops_duplicates() {
        let dictionary = Dictionary::from_slice(&["slate", "crane", "SLATE", "bad"]);
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["slate", "crane"]);
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn embedded_dictionary_is_populated() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), WORDS.len());
        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("abide"));
    }

    #[test]
    fn get_returns_stored_word() {
        let dictionary = Dictionary::from_slice(&["crane", "slate"]);
        assert_eq!(dictionary.get("Slate").map(Word::text), Some("slate"));
        assert!(dictionary.get("trace").is_none());
    }

    #[test]
    fn get_points_at_first_occurrence_position() {
        let words: Vec<Word> = ["abide", "crane", "abide", "slate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let dictionary = Dictionary::from_words(words);

        assert_eq!(dictionary.len(), 3);
        for word in dictionary.words() {
            assert!(std::ptr::eq(dictionary.get(word.text()).unwrap(), word));
        }
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("crane"));
    }
}
