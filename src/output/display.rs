//! Display functions for command results

use super::formatters::{create_progress_bar, describe_constraints, render_row, scored_tiles};
use crate::commands::{BenchmarkResult, CheckResult, SolveResult};
use crate::game::MAX_GUESSES;
use crate::solutions::SolutionTable;
use chrono::NaiveDate;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {}  {}",
            turn,
            render_row(&scored_tiles(&step.result)),
            step.result.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print a single evaluation and what it implies
pub fn print_check_result(check: &CheckResult) {
    println!(
        "\n  {}  {}\n",
        render_row(&scored_tiles(&check.result)),
        check.result.to_emoji()
    );
    for line in describe_constraints(&check.constraints) {
        println!("  {line}");
    }
    println!(
        "\n  {} dictionary words fit this feedback",
        check.remaining.to_string().bright_cyan().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!(
            "({:.1}%)",
            result.solved as f64 / result.total_words.max(1) as f64 * 100.0
        )
        .green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for guess_count in 1..=MAX_GUESSES {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = count as f64 / result.total_words.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!(
            "\n{} {}",
            "Unsolved:".red().bold(),
            result
                .failures
                .iter()
                .take(20)
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

/// Print the solution table, marking `today`
pub fn print_solutions(table: &SolutionTable, today: NaiveDate) {
    println!("\n{:<12} {:>6}  {}", "Date", "#", "Word");
    println!("{}", "─".repeat(28));
    for (date, solution) in table.iter() {
        let line = format!(
            "{:<12} {:>6}  {}",
            date.to_string(),
            solution.id,
            solution.word.text().to_uppercase()
        );
        if *date == today {
            println!("{}  {}", line.bright_yellow().bold(), "← today".bright_black());
        } else {
            println!("{line}");
        }
    }
    println!("\n{} solutions", table.len());
}
