//! Word solving command
//!
//! Lets the suggester play against a known word and records every step.

use crate::core::{GuessResult, Word};
use crate::error::EngineError;
use crate::game::MAX_GUESSES;
use crate::solver::Solver;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    /// Played as the opening guess instead of the suggester's choice
    pub first_guess: Option<Word>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
            first_guess: None,
        }
    }

    #[must_use]
    pub fn with_first_guess(mut self, word: Word) -> Self {
        self.first_guess = Some(word);
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

impl SolveResult {
    #[must_use]
    pub fn results(&self) -> Vec<GuessResult> {
        self.guesses.iter().map(|step| step.result.clone()).collect()
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub result: GuessResult,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if the target is not a five-letter
/// word, and `EngineError::NoCandidates` if the dictionary is empty.
pub fn solve_word(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, EngineError> {
    let target = Word::new(&config.target)?;

    let mut history: Vec<GuessResult> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 0..config.max_guesses {
        let candidates_before = solver.count_candidates(&history);

        let guess = match (turn, &config.first_guess) {
            (0, Some(first)) => first,
            _ => solver
                .next_guess(&history)
                .ok_or(EngineError::NoCandidates)?,
        };

        let result = GuessResult::evaluate(guess, &target);
        let solved = result.is_solved();
        history.push(result.clone());

        let candidates_after = solver.count_candidates(&history);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            result,
            candidates_before,
            candidates_after,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
