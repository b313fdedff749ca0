//! Next-guess suggestion
//!
//! Three stages:
//! 1. Hard-filter the dictionary with the constraint set
//! 2. Rank the whole dictionary by how common its still-unknown letters are
//!    among the stage-1 survivors
//! 3. Break ties at the top with letter frequency over the whole dictionary

use super::constraints::ConstraintSet;
use super::frequency::LetterFrequency;
use crate::core::Word;
use crate::error::EngineError;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Suggest the next guess, using the thread-local RNG for the random fallback
///
/// # Errors
///
/// Returns `EngineError::NoCandidates` if no dictionary word satisfies the
/// constraints.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::{ConstraintSet, suggest};
///
/// let dictionary: Vec<Word> = ["CRANE", "SLATE", "TRACE"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let guess = suggest(&ConstraintSet::new(), &dictionary).unwrap();
/// assert_eq!(guess.text(), "trace");
/// ```
pub fn suggest<'d>(
    constraints: &ConstraintSet,
    dictionary: &'d [Word],
) -> Result<&'d Word, EngineError> {
    suggest_with_rng(constraints, dictionary, &mut rand::rng())
}

/// Suggest the next guess with an explicit RNG
///
/// The RNG is only consulted when the survivors share no letter outside the
/// known-present set; every other path is deterministic.
///
/// # Errors
///
/// Returns `EngineError::NoCandidates` if no dictionary word satisfies the
/// constraints.
pub fn suggest_with_rng<'d, R: Rng + ?Sized>(
    constraints: &ConstraintSet,
    dictionary: &'d [Word],
    rng: &mut R,
) -> Result<&'d Word, EngineError> {
    let candidates = constraints.candidates(dictionary);
    log::debug!(
        "stage 1: {} of {} words satisfy the constraints",
        candidates.len(),
        dictionary.len()
    );

    match candidates.as_slice() {
        [] => return Err(EngineError::NoCandidates),
        [only] => return Ok(*only),
        _ => {}
    }

    let informative =
        LetterFrequency::from_words(candidates.iter().copied()).without(constraints.present());
    if informative.is_empty() {
        log::debug!("stage 2: no informative letters left, picking a random candidate");
        return candidates
            .choose(rng)
            .copied()
            .ok_or(EngineError::NoCandidates);
    }

    let ranked = informative.rank(dictionary.iter().filter(|word| informative.covers_any(word)));
    let Some(&(_, best_score)) = ranked.first() else {
        return Err(EngineError::NoCandidates);
    };
    let best: Vec<&Word> = ranked
        .iter()
        .take_while(|(_, score)| *score == best_score)
        .map(|&(word, _)| word)
        .collect();
    log::debug!(
        "stage 2: {} informative letters, {} words share the top score {best_score}",
        informative.len(),
        best.len()
    );

    if let [only] = best.as_slice() {
        return Ok(*only);
    }

    let global = LetterFrequency::from_words(dictionary);
    let reranked = global.rank(best);
    log::debug!(
        "stage 3: tie broken by dictionary-wide frequency, top score {}",
        reranked.first().map_or(0, |&(_, score)| score)
    );

    reranked
        .first()
        .map(|&(word, _)| word)
        .ok_or(EngineError::NoCandidates)
}
