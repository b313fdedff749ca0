//! Core domain types for Wordle
//!
//! Words, letter feedback and the evaluator. Everything here is pure and
//! depends on no other module of the crate except the error types.

mod feedback;
mod word;

pub use feedback::{GuessResult, LetterResult, LetterStatus, evaluate};
pub use word::{WORD_LENGTH, Word};
