//! Board state for one puzzle

use crate::core::{GuessResult, Word};
use crate::error::WordError;
use crate::solver::{ConstraintSet, Solver};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Rows on the board
pub const MAX_GUESSES: usize = 6;

/// Reasons a guess is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("{0:?} is not in the word list")]
    NotInDictionary(String),
    #[error("the board is full")]
    BoardFull,
    #[error("the word list is empty")]
    NoSuggestion,
}

/// Guesses played against one solution
///
/// Only the typed words are stored. Feedback and constraints are refolded
/// from the whole history on every query.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    solution: Word,
    guesses: Vec<Word>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, solution: Word) -> Self {
        Self {
            dictionary,
            solution,
            guesses: Vec::new(),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Switch to another puzzle, clearing the board
    pub fn set_solution(&mut self, solution: Word) {
        self.solution = solution;
        self.reset();
    }

    /// Play a typed word
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the board is full, the input is not a
    /// five-letter word, or the word is not in the dictionary. A refused
    /// guess leaves the board unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::game::{Session, SessionError};
    /// use wordle_helper::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_slice(&["crane", "slate", "abide"]);
    /// let mut session = Session::new(&dictionary, Word::new("abide").unwrap());
    ///
    /// let result = session.submit("Crane").unwrap();
    /// assert_eq!(result.to_emoji(), "⬜⬜🟨⬜🟩");
    /// assert!(matches!(session.submit("zzzzz"), Err(SessionError::NotInDictionary(_))));
    /// assert_eq!(session.guesses().len(), 1);
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<GuessResult, SessionError> {
        if self.is_full() {
            return Err(SessionError::BoardFull);
        }

        let word = Word::new(raw.trim())?;
        let word = self
            .dictionary
            .get(word.text())
            .cloned()
            .ok_or_else(|| SessionError::NotInDictionary(word.text().to_string()))?;

        Ok(self.push(word))
    }

    /// Ask the solver for the next guess and play it
    ///
    /// # Errors
    ///
    /// Returns `SessionError::BoardFull` when no rows remain and
    /// `SessionError::NoSuggestion` when the dictionary is empty.
    pub fn suggest_next(&mut self) -> Result<GuessResult, SessionError> {
        if self.is_full() {
            return Err(SessionError::BoardFull);
        }

        let solver = Solver::new(self.dictionary.words());
        let word = solver
            .next_guess(&self.results())
            .cloned()
            .ok_or(SessionError::NoSuggestion)?;
        log::debug!("suggested {word} after {} guesses", self.guesses.len());

        Ok(self.push(word))
    }

    fn push(&mut self, word: Word) -> GuessResult {
        let result = GuessResult::evaluate(&word, &self.solution);
        self.guesses.push(word);
        result
    }

    /// Drop the most recent guess, returning it
    pub fn undo(&mut self) -> Option<Word> {
        self.guesses.pop()
    }

    pub fn reset(&mut self) {
        self.guesses.clear();
    }

    /// Feedback for every guess, in play order
    #[must_use]
    pub fn results(&self) -> Vec<GuessResult> {
        self.guesses
            .iter()
            .map(|guess| GuessResult::evaluate(guess, &self.solution))
            .collect()
    }

    /// Constraints implied by the board so far
    #[must_use]
    pub fn constraints(&self) -> ConstraintSet {
        ConstraintSet::accumulate(&self.results())
    }

    /// Dictionary words still consistent with the board
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.constraints().candidates(self.dictionary.words()).len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guesses.last().is_some_and(|guess| *guess == self.solution)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.guesses.len() >= MAX_GUESSES
    }

    /// Solved or out of rows
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_solved() || self.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&[
            "crane", "slate", "trace", "abide", "aside", "speed", "erase", "robot", "floor",
        ])
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn submit_scores_against_the_solution() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, word("abide"));

        let result = session.submit("speed").unwrap();
        let statuses: Vec<LetterStatus> = result.letters().iter().map(|lr| lr.status).collect();
        assert_eq!(
            statuses,
            vec![
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Present,
            ]
        );
        assert_eq!(session.results(), vec![result]);
    }

    #[test]
    fn submit_rejects_bad_words() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, word("abide"));

        assert_eq!(
            session.submit("abid"),
            Err(SessionError::InvalidWord(WordError::InvalidLength(4)))
        );
        assert_eq!(
            session.submit("zebra"),
            Err(SessionError::NotInDictionary("zebra".to_string()))
        );
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn submit_is_case_insensitive() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, word("abide"));

        assert!(session.submit("  ABIDE ").unwrap().is_solved());
        assert!(session.is_solved());
        assert!(session.is_over());
    }

    #[test]
    fn board_fills_after_six_guesses() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, word("abide"));

        for guess in ["crane", "slate", "trace", "aside", "speed", "erase"] {
            session.submit(guess).unwrap();
        }

        assert!(session.is_full());
        assert!(session.is_over());
        assert!(!session.is_solved());
        assert_eq!(session.submit("abide"), Err(SessionError::BoardFull));
        assert_eq!(session.suggest_next(), Err(SessionError::BoardFull));
    }

    #[test]
    fn undo_and_reset() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, word("abide"));

        session.submit("crane").unwrap();
        session.submit("slate").unwrap();
        assert_eq!(session.undo(), Some(word("slate")));
        assert_eq!(session.guesses(), &[word("crane")]);

        session.reset();
        assert!(session.guesses().is_empty());
        assert_eq!(session.undo(), None);
        assert!(session.constraints().is_empty());
    }

    #[test]
    fn set_solution_clears_the_board() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, word("abide"));

        session.submit("crane").unwrap();
        session.set_solution(word("robot"));

        assert!(session.guesses().is_empty());
        assert_eq!(session.solution(), &word("robot"));
    }

    #[test]
    fn constraints_follow_the_history() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, word("abide"));

        session.submit("crane").unwrap();
        let constraints = session.constraints();
        assert_eq!(constraints.correct_at(4), Some(b'e'));
        assert!(constraints.absent().contains(&b'c'));
        assert!(session.remaining() < dictionary.len());

        session.undo();
        assert!(session.constraints().is_empty());
        assert_eq!(session.remaining(), dictionary.len());
    }

    #[test]
    fn suggest_next_plays_a_dictionary_word() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, word("robot"));

        let result = session.suggest_next().unwrap();
        assert!(dictionary.contains(&result.word()));
        assert_eq!(session.guesses().len(), 1);
    }

    #[test]
    fn suggester_solves_within_the_board() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, word("floor"));

        while !session.is_over() {
            session.suggest_next().unwrap();
        }
        assert!(session.is_solved());
    }

    #[test]
    fn suggest_next_with_empty_dictionary() {
        let dictionary = Dictionary::from_slice(&[]);
        let mut session = Session::new(&dictionary, word("abide"));
        assert_eq!(session.suggest_next(), Err(SessionError::NoSuggestion));
    }
}
