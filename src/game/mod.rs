//! A single puzzle board
//!
//! `Session` keeps the guesses typed against one solution and derives
//! feedback and constraints from them on demand.

mod session;

pub use session::{MAX_GUESSES, Session, SessionError};
