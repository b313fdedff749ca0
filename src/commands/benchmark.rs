//! Benchmark command
//!
//! Plays the suggester against many target words in parallel.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    /// Mean guesses over solved words
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of words solved in that many guesses
    pub distribution: BTreeMap<usize, usize>,
    /// Words not solved within the board
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total_words - self.solved
    }
}

/// Outcome of one game: guesses used, or `None` if the board ran out
fn play(solver: &Solver<'_>, target: &Word, forced_first: Option<&Word>) -> Option<usize> {
    let mut config = SolveConfig::new(target.text().to_string());
    if let Some(first) = forced_first {
        config = config.with_first_guess(first.clone());
    }

    match solve_word(config, solver) {
        Ok(result) if result.success => Some(result.guesses.len()),
        Ok(_) => None,
        Err(err) => {
            log::warn!("could not play {target}: {err}");
            None
        }
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {eta}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(err) => log::debug!("progress bar template rejected: {err}"),
    }
    pb
}

/// Run benchmark on a set of target words
///
/// If `forced_first` is provided, it will be used as the first guess instead of
/// letting the solver choose.
pub fn run_benchmark(
    solver: &Solver<'_>,
    target_words: &[Word],
    forced_first: Option<&Word>,
) -> BenchmarkResult {
    let start = Instant::now();
    let pb = progress_bar(target_words.len());

    let outcomes: Vec<(&Word, Option<usize>)> = target_words
        .par_iter()
        .map(|target| {
            let outcome = play(solver, target, forced_first);
            pb.inc(1);
            (target, outcome)
        })
        .collect();

    pb.finish_and_clear();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();
    for (target, outcome) in &outcomes {
        match outcome {
            Some(guesses) => *distribution.entry(*guesses).or_insert(0) += 1,
            None => failures.push(target.text().to_string()),
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(g, n)| g * n).sum();
    let duration = start.elapsed();
    let total_words = target_words.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_GUESSES;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::WORDS;

    #[test]
    fn benchmark_runs() {
        let words = words_from_slice(&WORDS[..200]);
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words[..10], None);

        assert_eq!(result.total_words, 10);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_GUESSES);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = words_from_slice(&WORDS[..200]);
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words[..20], None);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failures.len(), result.total_words);
        assert_eq!(result.failed(), result.failures.len());
    }

    #[test]
    fn benchmark_with_forced_first_word() {
        let words = words_from_slice(&WORDS[..100]);
        let solver = Solver::new(&words);
        let forced = words.first();

        let result = run_benchmark(&solver, &words[..5], forced);

        assert_eq!(result.total_words, 5);
        // the forced opener is the first target, solved immediately
        assert_eq!(result.min_guesses, 1);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let words = words_from_slice(&WORDS[..100]);
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &[], None);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.average_guesses, 0.0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let words = words_from_slice(&WORDS[..200]);
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words[..10], None);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        for &guess_count in result.distribution.keys() {
            assert!((1..=MAX_GUESSES).contains(&guess_count));
        }
    }
}
