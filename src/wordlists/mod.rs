//! Word lists for Wordle solving
//!
//! Provides the embedded dictionary compiled into the binary for zero-cost
//! access, plus file loading for custom lists.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
