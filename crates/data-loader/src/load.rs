//! Loading a `ShowtimeTable` from one or more CSV files.
//!
//! Production data comes from several feeds (an indie listing and a chain
//! listing). Each file is parsed on its own rayon task; rows are then
//! concatenated in argument order and sanitized once.
//!
//! When more than one file is merged, a screening is identified by
//! (date, time, theater, film) and only its first occurrence is kept, so
//! a showing listed by two feeds is counted once. A single file is never
//! deduplicated.

use crate::error::Result;
use crate::parser;
use crate::sanitize::sanitize;
use crate::types::{RawRow, ShowtimeRecord, ShowtimeTable};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

impl ShowtimeTable {
    /// Load a single CSV file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::load_from_files(&[path.to_path_buf()])
    }

    /// Load and merge several CSV files.
    ///
    /// Files are parsed in parallel, but the resulting row order is always
    /// the order of `paths`. The first file that fails aborts the load.
    pub fn load_from_files(paths: &[PathBuf]) -> Result<Self> {
        let parsed: Vec<Result<Vec<RawRow>>> = paths
            .par_iter()
            .map(|path| parser::parse_showtimes(path))
            .collect();

        let mut rows = Vec::new();
        for result in parsed {
            rows.extend(result?);
        }

        let mut table = Self::from_rows(&rows);
        if paths.len() > 1 {
            table.dedup_screenings();
        }
        tracing::info!(
            "Loaded {} showtimes from {} file(s) ({} incomplete rows dropped, {} duplicates merged)",
            table.records.len(),
            paths.len(),
            table.dropped,
            table.duplicates
        );
        Ok(table)
    }

    /// Sanitize already-parsed rows into a table.
    pub fn from_rows(rows: &[RawRow]) -> Self {
        let records = sanitize(rows);
        let dropped = rows.len() - records.len();
        Self {
            records,
            dropped,
            duplicates: 0,
        }
    }

    /// Keep the first record of each (date, time, theater, film) screening.
    fn dedup_screenings(&mut self) {
        let before = self.records.len();
        let mut seen = HashSet::new();
        self.records.retain(|record| seen.insert(screening_key(record)));
        self.duplicates += before - self.records.len();
    }
}

fn screening_key(record: &ShowtimeRecord) -> (String, Option<String>, Option<String>, String) {
    (
        record.date.clone(),
        record.time.clone(),
        record.theater.clone(),
        record.film.clone(),
    )
}
