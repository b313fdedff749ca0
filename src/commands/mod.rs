//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod check;
pub mod play;
mod prompt;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_guess};
pub use play::run_play;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
