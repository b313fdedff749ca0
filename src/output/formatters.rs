//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterResult, LetterStatus, WORD_LENGTH};
use crate::game::MAX_GUESSES;
use crate::solver::ConstraintSet;
use colored::{ColoredString, Colorize};

/// One cell of the drawn board
///
/// Only `Scored` tiles carry feedback; the other two exist for drawing rows
/// that have not been played yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Unused cell
    Empty,
    /// Letter typed but not yet submitted
    Pending(char),
    Scored(LetterResult),
}

impl Tile {
    #[must_use]
    pub fn render(self) -> ColoredString {
        match self {
            Self::Empty => " _ ".bright_black(),
            Self::Pending(letter) => format!(" {} ", letter.to_ascii_uppercase()).bold(),
            Self::Scored(result) => {
                let text = format!(" {} ", result.letter_char().to_ascii_uppercase());
                match result.status {
                    LetterStatus::Correct => text.black().on_green().bold(),
                    LetterStatus::Present => text.black().on_yellow().bold(),
                    LetterStatus::Absent => text.white().on_bright_black(),
                }
            }
        }
    }
}

/// Tiles for a scored guess
#[must_use]
pub fn scored_tiles(result: &GuessResult) -> [Tile; WORD_LENGTH] {
    (*result.letters()).map(Tile::Scored)
}

/// Tiles for a partially typed row
#[must_use]
pub fn pending_tiles(typed: &str) -> [Tile; WORD_LENGTH] {
    let mut letters = typed.chars();
    std::array::from_fn(|_| letters.next().map_or(Tile::Empty, Tile::Pending))
}

#[must_use]
pub fn render_row(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| tile.render().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every row of the board: played guesses, then the pending row, then blanks
#[must_use]
pub fn render_board(results: &[GuessResult], pending: Option<&str>) -> Vec<String> {
    let mut rows: Vec<[Tile; WORD_LENGTH]> = results.iter().map(scored_tiles).collect();
    if let Some(typed) = pending
        && rows.len() < MAX_GUESSES
    {
        rows.push(pending_tiles(typed));
    }
    rows.resize(MAX_GUESSES.max(rows.len()), [Tile::Empty; WORD_LENGTH]);

    rows.iter().map(|row| render_row(row)).collect()
}

/// Share-text grid, one emoji row per guess
#[must_use]
pub fn emoji_grid(results: &[GuessResult]) -> String {
    results
        .iter()
        .map(GuessResult::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

fn letters(set: impl IntoIterator<Item = u8>) -> String {
    set.into_iter()
        .map(|letter| char::from(letter.to_ascii_uppercase()))
        .collect()
}

/// Describe a constraint set as a few labelled lines
#[must_use]
pub fn describe_constraints(constraints: &ConstraintSet) -> Vec<String> {
    let pattern: String = (0..WORD_LENGTH)
        .map(|i| {
            constraints
                .correct_at(i)
                .map_or('_', |letter| char::from(letter.to_ascii_uppercase()))
        })
        .collect();

    let mut lines = vec![
        format!("Pattern: {pattern}"),
        format!("Present: {}", letters(constraints.present().iter().copied())),
        format!("Absent:  {}", letters(constraints.absent().iter().copied())),
    ];

    for position in 0..WORD_LENGTH {
        let excluded = constraints.incorrect_at(position);
        if !excluded.is_empty() {
            lines.push(format!(
                "Not at {}: {}",
                position + 1,
                letters(excluded.iter().copied())
            ));
        }
    }

    let contradictions = letters(constraints.contradictions());
    if !contradictions.is_empty() {
        lines.push(format!("Both absent and present: {contradictions}"));
    }

    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn pending_tiles_pad_with_empty() {
        let tiles = pending_tiles("ab");
        assert_eq!(
            tiles,
            [
                Tile::Pending('a'),
                Tile::Pending('b'),
                Tile::Empty,
                Tile::Empty,
                Tile::Empty,
            ]
        );
    }

    #[test]
    fn scored_tiles_keep_feedback() {
        let result = evaluate("crane", "abide").unwrap();
        let tiles = scored_tiles(&result);
        assert!(matches!(tiles[4], Tile::Scored(lr) if lr.status == LetterStatus::Correct));
        assert!(matches!(tiles[2], Tile::Scored(lr) if lr.status == LetterStatus::Present));
    }

    #[test]
    fn board_always_has_six_rows() {
        colored::control::set_override(false);
        let results = vec![evaluate("crane", "abide").unwrap()];

        let board = render_board(&results, Some("ab"));
        assert_eq!(board.len(), MAX_GUESSES);
        assert_eq!(board[0], " C   R   A   N   E ");
        assert_eq!(board[1], " A   B   _   _   _ ");
        assert_eq!(board[5], " _   _   _   _   _ ");
    }

    #[test]
    fn emoji_grid_rows() {
        let results = vec![
            evaluate("crane", "abide").unwrap(),
            evaluate("abide", "abide").unwrap(),
        ];
        assert_eq!(emoji_grid(&results), "⬜⬜🟨⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn describe_constraints_lists_letters() {
        let constraints = ConstraintSet::from_guesses(["crane"], "abide").unwrap();
        let lines = describe_constraints(&constraints);
        assert_eq!(lines[0], "Pattern: ____E");
        assert_eq!(lines[1], "Present: AE");
        assert_eq!(lines[2], "Absent:  CNR");
        assert!(lines.contains(&"Not at 3: A".to_string()));
    }

    #[test]
    fn describe_constraints_reports_contradictions() {
        let constraints = ConstraintSet::from_guesses(["speed"], "abide").unwrap();
        let lines = describe_constraints(&constraints);
        assert_eq!(lines.last().unwrap(), "Both absent and present: E");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
