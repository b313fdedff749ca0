//! Dated solution lookup
//!
//! The puzzle for each day comes from a JSON table mapping ISO dates to the
//! puzzle number and its word:
//!
//! ```json
//! { "2026-10-16": { "id": 1945, "word": "bleak" } }
//! ```

use crate::core::Word;
use crate::error::WordError;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

const EMBEDDED_SOLUTIONS: &str = include_str!("../data/solutions.json");

/// Error type for loading a solution table
#[derive(Debug, Error)]
pub enum SolutionsError {
    #[error("failed to read solution table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed solution table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid date key {key:?}: {source}")]
    InvalidDate {
        key: String,
        source: chrono::ParseError,
    },
    #[error("invalid solution for {date}: {source}")]
    InvalidWord { date: NaiveDate, source: WordError },
}

#[derive(Debug, Deserialize)]
struct RawSolution {
    id: u32,
    word: String,
}

/// The puzzle for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub id: u32,
    pub word: Word,
}

/// Solutions keyed by date, iterated in date order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionTable {
    entries: BTreeMap<NaiveDate, Solution>,
}

impl SolutionTable {
    /// Parse a JSON solution table
    ///
    /// # Errors
    ///
    /// Returns `SolutionsError` if the JSON is malformed, a key is not a
    /// `YYYY-MM-DD` date, or a word is not five letters.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordle_helper::solutions::SolutionTable;
    ///
    /// let table = SolutionTable::from_json(r#"{"2024-01-01": {"id": 926, "word": "RALPH"}}"#).unwrap();
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// assert_eq!(table.for_date(day).unwrap().word.text(), "ralph");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SolutionsError> {
        let raw: BTreeMap<String, RawSolution> = serde_json::from_str(json)?;

        let entries = raw
            .into_iter()
            .map(|(key, RawSolution { id, word })| -> Result<_, SolutionsError> {
                let date = NaiveDate::parse_from_str(&key, "%Y-%m-%d")
                    .map_err(|source| SolutionsError::InvalidDate { key, source })?;
                let word =
                    Word::new(word).map_err(|source| SolutionsError::InvalidWord { date, source })?;
                Ok((date, Solution { id, word }))
            })
            .collect::<Result<BTreeMap<NaiveDate, Solution>, _>>()?;

        log::debug!("parsed {} solutions", entries.len());
        Ok(Self { entries })
    }

    /// Load a JSON solution table from disk
    ///
    /// # Errors
    ///
    /// Returns `SolutionsError` if the file cannot be read or parsed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SolutionsError> {
        let path = path.as_ref();
        let table = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("loaded {} solutions from {}", table.len(), path.display());
        Ok(table)
    }

    /// The table compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `SolutionsError` if the embedded table is malformed.
    pub fn embedded() -> Result<Self, SolutionsError> {
        Self::from_json(EMBEDDED_SOLUTIONS)
    }

    #[must_use]
    pub fn for_date(&self, date: NaiveDate) -> Option<&Solution> {
        self.entries.get(&date)
    }

    /// Today's puzzle, by UTC date
    #[must_use]
    pub fn today(&self) -> Option<&Solution> {
        self.for_date(Utc::now().date_naive())
    }

    /// The first date whose solution is `word`
    #[must_use]
    pub fn date_of(&self, word: &Word) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|(_, solution)| solution.word == *word)
            .map(|(date, _)| *date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Solution)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
