//! Score one guess against a solution

use crate::core::{GuessResult, evaluate};
use crate::error::EngineError;
use crate::solver::{ConstraintSet, Solver};

/// Evaluation of a single guess
pub struct CheckResult {
    pub result: GuessResult,
    pub constraints: ConstraintSet,
    /// Dictionary words consistent with the feedback
    pub remaining: usize,
}

/// Evaluate `guess` against `solution` and derive its constraints
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if either word is not five letters.
pub fn check_guess(
    guess: &str,
    solution: &str,
    solver: &Solver<'_>,
) -> Result<CheckResult, EngineError> {
    let result = evaluate(guess, solution)?;
    let constraints = ConstraintSet::accumulate(std::slice::from_ref(&result));
    let remaining = constraints.candidates(solver.dictionary()).len();

    Ok(CheckResult {
        result,
        constraints,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, Word};

    #[test]
    fn check_reports_feedback_and_constraints() {
        let dictionary: Vec<Word> = ["crane", "abide", "aside"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let solver = Solver::new(&dictionary);

        let check = check_guess("crane", "ABIDE", &solver).unwrap();

        assert_eq!(check.result.to_emoji(), "⬜⬜🟨⬜🟩");
        assert_eq!(check.result.letters()[2].status, LetterStatus::Present);
        assert_eq!(check.constraints.correct_at(4), Some(b'e'));
        assert_eq!(check.remaining, 2);
    }

    #[test]
    fn check_rejects_bad_input() {
        let solver = Solver::new(&[]);
        assert!(matches!(
            check_guess("crane", "abides", &solver),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
