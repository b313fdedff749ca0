//! Constraint accumulation
//!
//! A `ConstraintSet` is the knowledge gathered from every guess so far. It is
//! always rebuilt from the full guess history by folding; nothing is updated
//! in place across calls.

use crate::core::{GuessResult, LetterStatus, WORD_LENGTH, Word};
use crate::error::EngineError;
use std::collections::BTreeSet;

/// Aggregate constraints derived from evaluated guesses
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConstraintSet {
    absent: BTreeSet<u8>,
    present: BTreeSet<u8>,
    incorrect: [BTreeSet<u8>; WORD_LENGTH],
    correct: [Option<u8>; WORD_LENGTH],
}

impl ConstraintSet {
    /// An empty constraint set, satisfied by every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole guess history into a fresh constraint set
    ///
    /// An empty history yields the empty set.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::evaluate;
    /// use wordle_helper::solver::ConstraintSet;
    ///
    /// let history = vec![evaluate("crane", "slate").unwrap()];
    /// let constraints = ConstraintSet::accumulate(&history);
    ///
    /// assert_eq!(constraints.correct_at(2), Some(b'a'));
    /// assert!(constraints.absent().contains(&b'c'));
    /// assert_eq!(constraints, ConstraintSet::accumulate(&history));
    /// ```
    #[must_use]
    pub fn accumulate(history: &[GuessResult]) -> Self {
        let constraints = history.iter().fold(Self::new(), Self::fold_guess);

        let contradictions: Vec<char> = constraints.contradictions().map(char::from).collect();
        if !contradictions.is_empty() {
            log::warn!(
                "letters {contradictions:?} are both absent and present; \
                 words containing them will be filtered out"
            );
        }

        constraints
    }

    /// Evaluate raw guesses against a known solution, then accumulate
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if the solution or any guess is not
    /// a five-letter word.
    pub fn from_guesses<I, S>(guesses: I, solution: &str) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let solution = Word::new(solution)?;
        let history = guesses
            .into_iter()
            .map(|guess| -> Result<_, EngineError> {
                let guess = Word::new(guess.as_ref())?;
                Ok(GuessResult::evaluate(&guess, &solution))
            })
            .collect::<Result<Vec<GuessResult>, _>>()?;

        Ok(Self::accumulate(&history))
    }

    /// Add one evaluated guess to the constraints
    ///
    /// - `Correct` at i pins position i and marks the letter present
    /// - `Present` at i excludes the letter from position i and marks it present
    /// - `Absent` adds the letter to the global absent set, which is never retracted
    #[must_use]
    pub fn fold_guess(mut self, result: &GuessResult) -> Self {
        for (position, lr) in result.letters().iter().enumerate() {
            match lr.status {
                LetterStatus::Correct => {
                    self.correct[position] = Some(lr.letter);
                    self.present.insert(lr.letter);
                }
                LetterStatus::Present => {
                    self.incorrect[position].insert(lr.letter);
                    self.present.insert(lr.letter);
                }
                LetterStatus::Absent => {
                    self.absent.insert(lr.letter);
                }
            }
        }
        self
    }

    /// Mark a letter as absent from the solution
    #[must_use]
    pub fn with_absent(mut self, letter: u8) -> Self {
        self.absent.insert(letter.to_ascii_lowercase());
        self
    }

    /// Mark a letter as present somewhere in the solution
    #[must_use]
    pub fn with_present(mut self, letter: u8) -> Self {
        self.present.insert(letter.to_ascii_lowercase());
        self
    }

    /// Mark a letter as present but not at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn with_incorrect(mut self, position: usize, letter: u8) -> Self {
        let letter = letter.to_ascii_lowercase();
        self.incorrect[position].insert(letter);
        self.present.insert(letter);
        self
    }

    /// Pin a letter at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn with_correct(mut self, position: usize, letter: u8) -> Self {
        let letter = letter.to_ascii_lowercase();
        self.correct[position] = Some(letter);
        self.present.insert(letter);
        self
    }

    #[must_use]
    pub const fn absent(&self) -> &BTreeSet<u8> {
        &self.absent
    }

    #[must_use]
    pub const fn present(&self) -> &BTreeSet<u8> {
        &self.present
    }

    /// Letters known not to occupy `position`
    #[must_use]
    pub fn incorrect_at(&self, position: usize) -> &BTreeSet<u8> {
        &self.incorrect[position]
    }

    /// The letter pinned at `position`, if any
    #[must_use]
    pub fn correct_at(&self, position: usize) -> Option<u8> {
        self.correct[position]
    }

    /// Check if nothing is known yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Letters that are in both the absent and the present set
    ///
    /// These arise when a duplicated guess letter exceeds the solution's count
    /// in one guess. The absent set wins during filtering.
    pub fn contradictions(&self) -> impl Iterator<Item = u8> + '_ {
        self.absent.intersection(&self.present).copied()
    }

    /// Stage-1 hard filter for a single word
    ///
    /// Checks, in order: no absent letter, every present letter, no letter at a
    /// position it is excluded from, and every pinned position.
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        if self.absent.iter().any(|&letter| word.has_letter(letter)) {
            return false;
        }
        if !self.present.iter().all(|&letter| word.has_letter(letter)) {
            return false;
        }
        let chars = word.chars();
        if chars
            .iter()
            .zip(&self.incorrect)
            .any(|(letter, excluded)| excluded.contains(letter))
        {
            return false;
        }
        chars
            .iter()
            .zip(&self.correct)
            .all(|(letter, pinned)| pinned.is_none_or(|pinned| pinned == *letter))
    }

    /// All dictionary words passing the stage-1 filter, in dictionary order
    #[must_use]
    pub fn candidates<'d>(&self, dictionary: &'d [Word]) -> Vec<&'d Word> {
        dictionary.iter().filter(|word| self.permits(word)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn empty_history_is_empty_set() {
        let constraints = ConstraintSet::accumulate(&[]);
        assert!(constraints.is_empty());
        assert_eq!(constraints, ConstraintSet::new());
    }

    #[test]
    fn fold_applies_letter_policy() {
        let result = evaluate("robot", "floor").unwrap();
        let constraints = ConstraintSet::new().fold_guess(&result);

        assert_eq!(constraints.correct_at(3), Some(b'o'));
        assert!(constraints.incorrect_at(0).contains(&b'r'));
        assert!(constraints.incorrect_at(1).contains(&b'o'));
        assert_eq!(
            constraints.present().iter().copied().collect::<Vec<_>>(),
            b"or"
        );
        assert_eq!(
            constraints.absent().iter().copied().collect::<Vec<_>>(),
            b"bt"
        );
    }

    #[test]
    fn accumulate_is_pure() {
        let history = vec![
            evaluate("crane", "ghost").unwrap(),
            evaluate("moist", "ghost").unwrap(),
        ];
        let first = ConstraintSet::accumulate(&history);
        let second = ConstraintSet::accumulate(&history);
        assert_eq!(first, second);
    }

    #[test]
    fn from_guesses_matches_manual_fold() {
        let manual = ConstraintSet::new()
            .fold_guess(&evaluate("crane", "ghost").unwrap())
            .fold_guess(&evaluate("moist", "ghost").unwrap());
        let folded = ConstraintSet::from_guesses(["crane", "moist"], "ghost").unwrap();
        assert_eq!(folded, manual);
    }

    #[test]
    fn from_guesses_rejects_bad_guess() {
        assert!(matches!(
            ConstraintSet::from_guesses(["cran"], "ghost"),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn duplicate_excess_is_marked_absent_and_present() {
        // speed vs abide: one e is present, the excess e is absent
        let constraints = ConstraintSet::from_guesses(["speed"], "abide").unwrap();
        assert!(constraints.present().contains(&b'e'));
        assert!(constraints.absent().contains(&b'e'));
        assert_eq!(constraints.contradictions().collect::<Vec<_>>(), b"e");

        // The absent filter runs first and rejects the real solution
        let abide = Word::new("abide").unwrap();
        assert!(!constraints.permits(&abide));
    }

    #[test]
    fn permits_checks_every_rule() {
        let constraints = ConstraintSet::new()
            .with_absent(b'z')
            .with_incorrect(0, b'r')
            .with_correct(2, b'a');

        assert!(constraints.permits(&Word::new("brave").unwrap()));
        assert!(!constraints.permits(&Word::new("graze").unwrap())); // absent z
        assert!(!constraints.permits(&Word::new("plate").unwrap())); // missing r
        assert!(!constraints.permits(&Word::new("roast").unwrap())); // r at 0
        assert!(!constraints.permits(&Word::new("barge").unwrap())); // a not at 2
    }

    #[test]
    fn candidates_keep_dictionary_order() {
        let dictionary = words(&["trace", "crane", "slate", "crate"]);
        let constraints = ConstraintSet::new().with_correct(0, b'c');
        let candidates: Vec<&str> = constraints
            .candidates(&dictionary)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(candidates, vec!["crane", "crate"]);
    }

    #[test]
    fn builders_lowercase_letters() {
        let constraints = ConstraintSet::new().with_correct(0, b'C');
        assert_eq!(constraints.correct_at(0), Some(b'c'));
        assert!(constraints.present().contains(&b'c'));
    }
}
