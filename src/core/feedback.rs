//! Guess evaluation and per-letter feedback
//!
//! Scoring follows Wordle's duplicate-letter rules: a guessed letter is
//! credited `Present`/`Correct` at most as many times as it occurs in the
//! solution, and exact positional matches claim occurrences first.

use super::word::{WORD_LENGTH, Word};
use crate::error::EngineError;
use std::fmt;

/// Correctness of one guessed letter
///
/// Ordered `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter is not in the solution (or all its occurrences are already claimed)
    Absent,
    /// Letter is in the solution at another position
    Present,
    /// Letter is in the solution at this position
    Correct,
}

impl LetterStatus {
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Emoji square used by the official game's share text
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for present and
    /// '-'/'_'/'.'/⬜/⬛ for absent.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// One guessed letter together with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    pub letter: u8,
    pub status: LetterStatus,
}

impl LetterResult {
    #[must_use]
    pub const fn new(letter: u8, status: LetterStatus) -> Self {
        Self { letter, status }
    }

    #[must_use]
    pub fn letter_char(self) -> char {
        char::from(self.letter)
    }
}

/// The scored form of one guess: five letter results in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    letters: [LetterResult; WORD_LENGTH],
}

impl GuessResult {
    /// Wrap already-scored letters
    #[must_use]
    pub const fn from_letters(letters: [LetterResult; WORD_LENGTH]) -> Self {
        Self { letters }
    }

    /// Score `guess` against a known `solution`
    ///
    /// # Algorithm
    /// 1. Build the solution's per-letter occupancy counts
    /// 2. First pass: mark exact matches `Correct` and consume their occurrence
    /// 3. Second pass, left to right over unmarked positions: `Present` while
    ///    occurrences remain, otherwise `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{GuessResult, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let solution = Word::new("abide").unwrap();
    /// let result = GuessResult::evaluate(&guess, &solution);
    ///
    /// assert_eq!(result.to_emoji(), "⬜⬜🟨⬜🟨");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut remaining = solution.char_counts();
        let mut marked: [Option<LetterStatus>; WORD_LENGTH] = [None; WORD_LENGTH];

        for (i, slot) in marked.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == solution.char_at(i) {
                *slot = Some(LetterStatus::Correct);
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, slot) in marked.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            let letter = guess.char_at(i);
            *slot = match remaining.get_mut(&letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    Some(LetterStatus::Present)
                }
                _ => Some(LetterStatus::Absent),
            };
        }

        let letters = std::array::from_fn(|i| {
            LetterResult::new(
                guess.char_at(i),
                marked[i].unwrap_or(LetterStatus::Absent),
            )
        });
        Self { letters }
    }

    /// Build a result from a guessed word and a feedback string like "GY-G-"
    ///
    /// Used when the solution is unknown and the feedback comes from a game
    /// played elsewhere. Returns `None` unless the feedback has exactly five
    /// recognised symbols (see [`LetterStatus::from_symbol`]).
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{GuessResult, LetterStatus, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let a = GuessResult::from_feedback(&guess, "--G-Y").unwrap();
    /// let b = GuessResult::from_feedback(&guess, "⬜⬜🟩⬜🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.letters()[2].status, LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn from_feedback(guess: &Word, feedback: &str) -> Option<Self> {
        let statuses: Vec<LetterStatus> = feedback
            .trim()
            .chars()
            .map(LetterStatus::from_symbol)
            .collect::<Option<_>>()?;

        if statuses.len() != WORD_LENGTH {
            return None;
        }

        let letters =
            std::array::from_fn(|i| LetterResult::new(guess.char_at(i), statuses[i]));
        Some(Self { letters })
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.letters
    }

    /// The guessed word, as typed
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|lr| lr.letter_char()).collect()
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters
            .iter()
            .all(|lr| lr.status == LetterStatus::Correct)
    }

    /// Number of letters with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.letters.iter().filter(|lr| lr.status == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|lr| lr.status.to_emoji()).collect()
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = &'a LetterResult;
    type IntoIter = std::slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.to_emoji())
    }
}

/// Score a raw guess string against a raw solution string
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if either string is not exactly five
/// ASCII letters. Inputs are never truncated or padded.
///
/// # Examples
/// ```
/// use wordle_helper::core::evaluate;
///
/// let result = evaluate("ABIDE", "abide").unwrap();
/// assert!(result.is_solved());
///
/// assert!(evaluate("abid", "abide").is_err());
/// ```
pub fn evaluate(guess: &str, solution: &str) -> Result<GuessResult, EngineError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    Ok(GuessResult::evaluate(&guess, &solution))
}
