//! Error types for the guess engine
//!
//! The engine has exactly two failure modes: malformed input words and a
//! constraint set that no dictionary word satisfies. Both are recoverable.

use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters: {0:?}")]
    InvalidCharacters(String),
}

/// Failure of one of the engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A guess or solution was not a five-letter word.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] WordError),

    /// The stage-1 filter left no dictionary word; the constraints contradict each other.
    #[error("no dictionary word satisfies the constraints")]
    NoCandidates,
}
