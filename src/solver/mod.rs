//! Constraint accumulation and guess suggestion
//!
//! `ConstraintSet` folds evaluated guesses into filters, `suggest` ranks the
//! dictionary against them, and `Solver` ties both to a shared word list.

mod constraints;
mod engine;
mod frequency;
mod suggest;

pub use constraints::ConstraintSet;
pub use engine::Solver;
pub use frequency::LetterFrequency;
pub use suggest::{suggest, suggest_with_rng};
