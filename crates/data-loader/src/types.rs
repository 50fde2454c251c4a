//! Core domain types for the showtime table.
//!
//! A table arrives as loosely-typed rows (`RawRow`). Rows that carry both
//! a film and a date become `ShowtimeRecord`s, which the rest of the
//! system treats as immutable.

use serde::{Deserialize, Serialize};

// =============================================================================
// Column names
// =============================================================================
// Fixed external contract of the input table.

pub const COL_FILM: &str = "Film";
pub const COL_THEATER: &str = "Theater";
pub const COL_DATE: &str = "Date";
pub const COL_TIME: &str = "Time";
pub const COL_RUNTIME: &str = "Runtime";
pub const COL_POSTER: &str = "posterDynamic";

// =============================================================================
// Raw rows
// =============================================================================

/// One row of the input table before sanitizing.
///
/// Fields are kept in header order. A column that is missing from a short
/// row simply has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a column, replacing any earlier value for the same column.
    pub fn insert(&mut self, column: &str, value: &str) {
        match self.fields.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.fields.push((column.to_string(), value.to_string())),
        }
    }

    /// Value of a column, or `None` when it is absent or blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// Showtime records
// =============================================================================

/// One scheduled screening.
///
/// `film` and `date` are guaranteed non-empty. Everything else may be
/// absent and is carried through untouched; `runtime` stays as text until
/// someone asks for [`ShowtimeRecord::runtime_minutes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowtimeRecord {
    pub film: String,
    /// Raw "M/D/YYYY" text, exactly as it appeared in the table
    pub date: String,
    pub theater: Option<String>,
    /// Free-text label such as "7:30 PM"
    pub time: Option<String>,
    pub runtime: Option<String>,
    pub poster_url: Option<String>,
}

impl ShowtimeRecord {
    /// Convenience constructor for a fully populated record.
    pub fn new(
        film: impl Into<String>,
        theater: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        runtime: impl Into<String>,
    ) -> Self {
        Self {
            film: film.into(),
            date: date.into(),
            theater: Some(theater.into()),
            time: Some(time.into()),
            runtime: Some(runtime.into()),
            poster_url: None,
        }
    }

    pub fn with_poster(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }

    /// Build a record from a raw row. Returns `None` when the row lacks a
    /// film or a date.
    pub fn from_raw(row: &RawRow) -> Option<Self> {
        let film = row.get(COL_FILM)?;
        let date = row.get(COL_DATE)?;

        Some(Self {
            film: film.to_string(),
            date: date.to_string(),
            theater: row.get(COL_THEATER).map(str::to_string),
            time: row.get(COL_TIME).map(str::to_string),
            runtime: row.get(COL_RUNTIME).map(str::to_string),
            poster_url: row.get(COL_POSTER).map(str::to_string),
        })
    }

    /// Runtime in minutes, or `None` when the text is missing or not a number.
    pub fn runtime_minutes(&self) -> Option<f64> {
        parse_runtime(self.runtime.as_deref())
    }
}

/// Numeric coercion of runtime text. `None` plays the role of NaN.
///
/// Only finite numbers count: `"inf"`, `"infinity"` and `"NaN"` are text,
/// not runtimes.
pub fn parse_runtime(text: Option<&str>) -> Option<f64> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .and_then(|t| t.parse::<f64>().ok())
        .filter(|minutes| minutes.is_finite())
}

// =============================================================================
// ShowtimeTable
// =============================================================================

/// Owned, sanitized record set in source-row order.
#[derive(Debug, Clone, Default)]
pub struct ShowtimeTable {
    pub(crate) records: Vec<ShowtimeRecord>,
    /// Raw rows dropped by the sanitizer during loading
    pub(crate) dropped: usize,
    /// Screenings listed by more than one merged file, kept once
    pub(crate) duplicates: usize,
}

impl ShowtimeTable {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            dropped: 0,
            duplicates: 0,
        }
    }

    pub fn from_records(records: Vec<ShowtimeRecord>) -> Self {
        Self {
            records,
            dropped: 0,
            duplicates: 0,
        }
    }

    pub fn records(&self) -> &[ShowtimeRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ShowtimeRecord> {
        self.records
    }

    /// (kept records, dropped raw rows)
    pub fn counts(&self) -> (usize, usize) {
        (self.records.len(), self.dropped)
    }

    /// Repeated screenings removed while merging several files.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}
