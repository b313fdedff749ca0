//! Wordle Helper - CLI
//!
//! Play the daily puzzle, get suggestions for a game played elsewhere, or
//! measure how the frequency suggester performs.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{NaiveDate, Utc};
use clap::{ArgAction, Parser, Subcommand};
use rand::prelude::IndexedRandom;
use std::io;
use std::path::PathBuf;
use wordle_helper::{
    commands::{SolveConfig, check_guess, run_assist, run_benchmark, run_play, solve_word},
    core::Word,
    game::Session,
    output::{print_benchmark_result, print_check_result, print_solutions, print_solve_result},
    solutions::SolutionTable,
    solver::Solver,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper: official scoring plus letter-frequency suggestions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'all' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    words: String,

    /// JSON solution table to use instead of the embedded one
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a puzzle on the terminal (default)
    Play {
        /// Puzzle date (YYYY-MM-DD); defaults to today in UTC
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Get suggestions for a game played elsewhere
    Assist,

    /// Score one guess against a solution
    Check {
        guess: String,
        solution: String,
    },

    /// Let the suggester solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts before and after each guess
        #[arg(long)]
        detail: bool,
    },

    /// Benchmark the suggester over the word list
    Benchmark {
        /// Number of words to test (default: the whole list)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// List the solution table
    Solutions,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the dictionary selected by `--words`
fn load_dictionary(words: &str) -> Result<Dictionary> {
    let dictionary = match words {
        "all" => Dictionary::embedded(),
        path => Dictionary::load_from_file(path)
            .with_context(|| format!("failed to load word list from {path}"))?,
    };

    if dictionary.is_empty() {
        bail!("the word list is empty");
    }
    log::info!("using {} dictionary words", dictionary.len());
    Ok(dictionary)
}

fn load_solutions(path: Option<&PathBuf>) -> Result<SolutionTable> {
    match path {
        Some(path) => SolutionTable::load_from_file(path)
            .with_context(|| format!("failed to load solutions from {}", path.display())),
        None => SolutionTable::embedded().context("embedded solution table is malformed"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.words)?;
    let solver = Solver::new(dictionary.words());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { date: None });

    match command {
        Commands::Play { date } => {
            let table = load_solutions(cli.solutions.as_ref())?;
            run_play_command(&dictionary, &table, date)
        }
        Commands::Assist => {
            run_assist(&solver, &mut io::stdin().lock(), &mut io::stdout().lock())?;
            Ok(())
        }
        Commands::Check { guess, solution } => {
            let check = check_guess(&guess, &solution, &solver)?;
            print_check_result(&check);
            Ok(())
        }
        Commands::Solve { word, detail } => {
            let result = solve_word(SolveConfig::new(word), &solver)?;
            print_solve_result(&result, detail);
            Ok(())
        }
        Commands::Benchmark { count, first_word } => {
            run_benchmark_command(&solver, count, first_word.as_deref())
        }
        Commands::Solutions => {
            let table = load_solutions(cli.solutions.as_ref())?;
            print_solutions(&table, Utc::now().date_naive());
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    table: &SolutionTable,
    date: Option<NaiveDate>,
) -> Result<()> {
    let solution = match date {
        Some(date) => table
            .for_date(date)
            .map(|solution| solution.word.clone())
            .ok_or_else(|| anyhow!("no puzzle for {date}"))?,
        None => match table.today() {
            Some(solution) => solution.word.clone(),
            None => {
                log::warn!("no puzzle for today; playing a random word");
                dictionary
                    .words()
                    .choose(&mut rand::rng())
                    .cloned()
                    .context("the word list is empty")?
            }
        },
    };

    let mut session = Session::new(dictionary, solution);
    run_play(
        &mut session,
        table,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver<'_>,
    count: Option<usize>,
    first_word: Option<&str>,
) -> Result<()> {
    let dictionary = solver.dictionary();
    let targets = &dictionary[..count.unwrap_or(dictionary.len()).min(dictionary.len())];

    let forced_first = first_word
        .map(Word::new)
        .transpose()
        .context("invalid first word")?;

    match &forced_first {
        Some(word) => println!(
            "Running benchmark on {} words with forced first word: {word}...",
            targets.len()
        ),
        None => println!("Running benchmark on {} words...", targets.len()),
    }

    let result = run_benchmark(solver, targets, forced_first.as_ref());
    print_benchmark_result(&result);
    Ok(())
}
