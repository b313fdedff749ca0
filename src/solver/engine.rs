//! Main solver interface

use super::constraints::ConstraintSet;
use super::suggest::suggest_with_rng;
use crate::core::{GuessResult, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Main Wordle solver
///
/// Turns a guess history into the next suggestion over a shared dictionary.
/// Holds no state between calls: every query refolds the full history.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    dictionary: &'a [Word],
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a [Word]) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Get the next guess given the evaluated guesses so far
    ///
    /// When the history contradicts every dictionary word, falls back to a
    /// random dictionary word. Returns `None` only for an empty dictionary.
    pub fn next_guess(&self, history: &[GuessResult]) -> Option<&'a Word> {
        self.next_guess_with_rng(history, &mut rand::rng())
    }

    /// Same as [`Solver::next_guess`] with an explicit RNG
    pub fn next_guess_with_rng<R: Rng + ?Sized>(
        &self,
        history: &[GuessResult],
        rng: &mut R,
    ) -> Option<&'a Word> {
        let constraints = ConstraintSet::accumulate(history);

        match suggest_with_rng(&constraints, self.dictionary, rng) {
            Ok(word) => Some(word),
            Err(err) => {
                log::warn!("{err}; falling back to a random dictionary word");
                self.dictionary.choose(rng)
            }
        }
    }

    /// Count how many dictionary words satisfy the history's constraints
    #[must_use]
    pub fn count_candidates(&self, history: &[GuessResult]) -> usize {
        self.get_candidates(history).len()
    }

    /// Dictionary words that satisfy the history's constraints
    #[must_use]
    pub fn get_candidates(&self, history: &[GuessResult]) -> Vec<&'a Word> {
        ConstraintSet::accumulate(history).candidates(self.dictionary)
    }
}
