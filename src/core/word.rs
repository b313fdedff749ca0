//! Wordle word representation
//!
//! A `Word` is a validated, lowercase, five-letter ASCII word stored as bytes.

use crate::error::WordError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every guess and solution.
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string, normalizing it to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters(text));
        }
        text.make_ascii_lowercase();

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Each letter of the word once, in order of first appearance
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, ch)| !self.chars[..i].contains(ch))
            .map(|(_, &ch)| ch)
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the occupancy pool when scoring duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("SLATE").unwrap().text(), "slate");
        assert_eq!(Word::new("TrAcE").unwrap().text(), "trace");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("crates"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("abid"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        assert!(matches!(
            Word::new("caf\u{e9}s"),
            Err(WordError::InvalidCharacters(_))
        ));
    }

    #[test_case("\u{212A}nife" ; "kelvin sign")]
    #[test_case("\u{130}rate" ; "dotted capital i")]
    #[test_case("\u{17F}late" ; "long s")]
    fn non_ascii_letters_rejected_before_lowercasing(input: &str) {
        assert_eq!(
            Word::new(input),
            Err(WordError::InvalidCharacters(input.to_string()))
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("abide").unwrap();
        assert!(word.has_letter(b'a'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b's'));
    }

    #[test]
    fn distinct_letters_skip_repeats() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.distinct_letters().collect::<Vec<_>>(), b"sped");

        let word = Word::new("mamma").unwrap();
        assert_eq!(word.distinct_letters().collect::<Vec<_>>(), b"ma");
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "Crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
