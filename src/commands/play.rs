//! Interactive play against a known solution
//!
//! Text-based board: type guesses, let the suggester fill a row, or switch to
//! another day's puzzle.

use super::prompt::read_line;
use crate::game::{MAX_GUESSES, Session, SessionError};
use crate::output::formatters::{emoji_grid, render_board};
use crate::solutions::SolutionTable;
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Draw the board, with `pending` as the next unplayed row
fn print_board<W: Write>(
    session: &Session<'_>,
    pending: Option<&str>,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output)?;
    for row in render_board(&session.results(), pending) {
        writeln!(output, "  {row}")?;
    }
    writeln!(output)
}

/// Name the puzzle being played, by its date when the table knows the word
fn print_header<W: Write>(
    session: &Session<'_>,
    table: &SolutionTable,
    output: &mut W,
) -> io::Result<()> {
    match table
        .date_of(session.solution())
        .and_then(|date| table.for_date(date).map(|solution| (date, solution.id)))
    {
        Some((date, id)) => writeln!(
            output,
            "Solving {}'s wordle (#{id})",
            date.to_string().bright_cyan().bold()
        ),
        None => writeln!(output, "Solving an unlisted wordle"),
    }
}

fn print_outcome<W: Write>(session: &Session<'_>, output: &mut W) -> io::Result<()> {
    let results = session.results();
    if session.is_solved() {
        let turns = results.len();
        writeln!(
            output,
            "{} Solved in {} {}!",
            "✓".green().bold(),
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        )?;
    } else {
        writeln!(
            output,
            "{} The word was {}",
            "✗".red().bold(),
            session.solution().text().to_uppercase().bright_yellow().bold()
        )?;
    }
    writeln!(output, "\n{}/{MAX_GUESSES}\n{}\n", results.len(), emoji_grid(&results))
}

/// Switch the board to the puzzle listed for `arg`
fn change_puzzle<W: Write>(
    session: &mut Session<'_>,
    table: &SolutionTable,
    arg: &str,
    output: &mut W,
) -> io::Result<()> {
    let Ok(date) = NaiveDate::parse_from_str(arg.trim(), "%Y-%m-%d") else {
        return writeln!(output, "{} expected a date like 2026-10-16", "✗".red());
    };
    let Some(solution) = table.for_date(date) else {
        return writeln!(output, "{} no puzzle for {date}", "✗".red());
    };

    session.set_solution(solution.word.clone());
    log::info!("switched to puzzle #{} ({date})", solution.id);
    print_header(session, table, output)?;
    print_board(session, None, output)
}

/// Run the interactive board until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    table: &SolutionTable,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\nGuess the five-letter word in {MAX_GUESSES} tries.")?;
    writeln!(
        output,
        "Commands: 'suggest' to let the helper guess, 'undo', 'reset', \
         'change YYYY-MM-DD' for another day, 'quit'"
    )?;
    print_header(session, table, output)?;
    print_board(session, None, output)?;

    loop {
        if session.is_over() {
            print_outcome(session, output)?;
            match read_line(input, output, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    session.reset();
                    print_board(session, None, output)?;
                    continue;
                }
                _ => {
                    writeln!(output, "\nThanks for playing!\n")?;
                    return Ok(());
                }
            }
        }

        let Some(line) = read_line(
            input,
            output,
            &format!("Guess {}/{MAX_GUESSES}", session.guesses().len() + 1),
        )?
        else {
            return Ok(());
        };
        let line = line.to_lowercase();

        if let Some(arg) = line
            .strip_prefix("change ")
            .or_else(|| line.strip_prefix("date "))
        {
            change_puzzle(session, table, arg, output)?;
            continue;
        }

        let submitted = match line.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(output, "\nThanks for playing!\n")?;
                return Ok(());
            }
            "undo" | "u" => {
                match session.undo() {
                    Some(word) => writeln!(output, "Removed {}", word.text().to_uppercase())?,
                    None => writeln!(output, "Nothing to undo!")?,
                }
                print_board(session, None, output)?;
                continue;
            }
            "reset" | "new" | "n" => {
                session.reset();
                writeln!(output, "Board cleared")?;
                print_board(session, None, output)?;
                continue;
            }
            "suggest" | "s" => session.suggest_next(),
            raw => session.submit(raw),
        };

        match submitted {
            Ok(_) => {
                print_board(session, None, output)?;
                if !session.is_over() {
                    writeln!(output, "{} words still possible", session.remaining())?;
                }
            }
            Err(err @ (SessionError::InvalidWord(_) | SessionError::NotInDictionary(_)))
                if line.chars().all(|c| c.is_ascii_alphabetic()) =>
            {
                // show the refused letters in the next row
                print_board(session, Some(&line), output)?;
                writeln!(output, "{} {err}", "✗".red())?;
            }
            Err(err) => writeln!(output, "{} {err}", "✗".red())?,
        }
    }
}
