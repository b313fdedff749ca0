//! Wordle Helper
//!
//! Scores guesses with the official duplicate-letter rules, folds the
//! feedback into constraints, and suggests the next guess by letter
//! frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::evaluate;
//! use wordle_helper::solver::{ConstraintSet, suggest};
//! use wordle_helper::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_slice(&["crane", "slate", "trace", "abide", "aside"]);
//!
//! let history = vec![evaluate("trace", "abide").unwrap()];
//! assert_eq!(history[0].to_emoji(), "⬜⬜🟨⬜🟩");
//!
//! let constraints = ConstraintSet::accumulate(&history);
//! let next = suggest(&constraints, dictionary.words()).unwrap();
//! assert_eq!(next.text(), "aside");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Constraint accumulation and suggestion
pub mod solver;

// Word lists
pub mod wordlists;

// Dated puzzles
pub mod solutions;

// Board state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
