//! Helper for a game played elsewhere
//!
//! The player reports each guess and its colours; the helper narrows the
//! candidates and suggests what to try next.

use super::prompt::read_line;
use crate::core::{GuessResult, Word};
use crate::output::formatters::{describe_constraints, emoji_grid};
use crate::solver::{ConstraintSet, Solver};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed once this few remain
const LIST_LIMIT: usize = 10;

/// One line of player input
#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Quit,
    New,
    Undo,
    Feedback(GuessResult),
    Invalid(String),
}

/// Parse `feedback`, `<word> <feedback>`, `win` or a command
///
/// A bare feedback string applies to the current suggestion.
fn parse_entry(line: &str, suggestion: Option<&Word>) -> Entry {
    let line = line.to_lowercase();
    match line.as_str() {
        "quit" | "q" | "exit" => return Entry::Quit,
        "new" | "n" => return Entry::New,
        "undo" | "u" => return Entry::Undo,
        _ => {}
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (guess, feedback) = match tokens.as_slice() {
        [feedback] => match suggestion {
            Some(word) => (word.clone(), *feedback),
            None => {
                return Entry::Invalid("no suggestion to score; enter '<word> <feedback>'".into());
            }
        },
        [word, feedback] => match Word::new(*word) {
            Ok(word) => (word, *feedback),
            Err(err) => return Entry::Invalid(err.to_string()),
        },
        _ => return Entry::Invalid("expected '<feedback>' or '<word> <feedback>'".into()),
    };

    if matches!(feedback, "win" | "correct" | "solved") {
        return Entry::Feedback(GuessResult::evaluate(&guess, &guess));
    }

    GuessResult::from_feedback(&guess, feedback).map_or_else(
        || Entry::Invalid(format!("invalid feedback {feedback:?}; use G/Y/- or 🟩🟨⬜")),
        Entry::Feedback,
    )
}

fn print_turn<W: Write>(
    output: &mut W,
    history: &[GuessResult],
    candidates: &[&Word],
    suggestion: Option<&Word>,
) -> io::Result<()> {
    writeln!(output, "{}", "─".repeat(60))?;
    writeln!(
        output,
        "Turn {}: {} candidates remaining",
        history.len() + 1,
        candidates.len()
    )?;
    writeln!(output, "{}", "─".repeat(60))?;

    if !history.is_empty() {
        for line in describe_constraints(&ConstraintSet::accumulate(history)) {
            writeln!(output, "  {line}")?;
        }
    }

    if let Some(word) = suggestion {
        writeln!(
            output,
            "\nSuggested guess: {}",
            word.text().to_uppercase().bright_yellow().bold()
        )?;
    }

    if !candidates.is_empty() && candidates.len() <= LIST_LIMIT {
        writeln!(output, "Remaining candidates:")?;
        for candidate in candidates {
            writeln!(output, "  • {}", candidate.text().to_uppercase())?;
        }
    }
    writeln!(output)
}

/// Run the assistant until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\nAfter each guess, enter the feedback pattern:")?;
    writeln!(output, "  G/g/🟩 correct, Y/y/🟨 wrong position, -/_/⬜ absent")?;
    writeln!(output, "  Prefix the guess ('crane --g-y') if you did not play the suggestion")?;
    writeln!(output, "  Type 'win' when solved. Commands: 'undo', 'new', 'quit'\n")?;

    let mut history: Vec<GuessResult> = Vec::new();

    loop {
        let candidates = solver.get_candidates(&history);
        if candidates.is_empty() {
            writeln!(
                output,
                "{} No candidates remain! The feedback may be incorrect; 'undo' to go back.",
                "✗".red().bold()
            )?;
        }
        let suggestion = solver.next_guess(&history);
        print_turn(output, &history, &candidates, suggestion)?;

        let Some(line) = read_line(input, output, "Feedback")? else {
            return Ok(());
        };

        match parse_entry(&line, suggestion) {
            Entry::Quit => {
                writeln!(output, "\nThanks for playing!\n")?;
                return Ok(());
            }
            Entry::New => {
                history.clear();
                writeln!(output, "New game started!\n")?;
            }
            Entry::Undo => {
                if history.pop().is_some() {
                    writeln!(output, "Undone! Back to turn {}\n", history.len() + 1)?;
                } else {
                    writeln!(output, "Nothing to undo!\n")?;
                }
            }
            Entry::Invalid(reason) => writeln!(output, "{} {reason}\n", "✗".red())?,
            Entry::Feedback(result) => {
                let solved = result.is_solved();
                history.push(result);
                if solved {
                    writeln!(
                        output,
                        "\n{} Solved in {} guesses!\n{}\n",
                        "✓".green().bold(),
                        history.len(),
                        emoji_grid(&history)
                    )?;
                    history.clear();
                    writeln!(output, "New game started!\n")?;
                }
            }
        }
    }
}
