//! Parser for showtime CSV files.
//!
//! Format: a header row followed by one row per screening, e.g.
//!
//! ```text
//! Date,Time,Theater,Film,Runtime,isAlmostSoldOut,posterDynamic,first_seen_date,last_updated,source
//! 7/4/2030,7:30 PM,Music Box,Jaws,124,None,https://...,2030-06-01,2030-06-02,indie
//! ```
//!
//! Rows may be shorter than the header; the missing trailing fields are
//! simply absent from the resulting `RawRow`. Header names are trimmed,
//! field values are kept verbatim. Nothing is validated here beyond the
//! presence of the `Film` and `Date` headers.

use crate::error::{DataLoadError, Result};
use crate::types::{COL_DATE, COL_FILM, RawRow};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parse a showtime CSV file into raw rows, in file order.
pub fn parse_showtimes(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_showtimes_reader(file, &path.display().to_string())
}

/// Parse showtime CSV from any reader. `source_name` only appears in errors.
pub fn parse_showtimes_reader<R: Read>(reader: R, source_name: &str) -> Result<Vec<RawRow>> {
    let csv_error = |source: csv::Error| DataLoadError::CsvError {
        file: source_name.to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    for required in [COL_FILM, COL_DATE] {
        if !headers.iter().any(|h| h == required) {
            return Err(DataLoadError::MissingColumn {
                file: source_name.to_string(),
                column: required.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(to_raw_row(&headers, &record));
    }

    tracing::debug!("Parsed {} rows from {}", rows.len(), source_name);
    Ok(rows)
}

/// Zip a record against the header row. Fields beyond the header are ignored.
fn to_raw_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
    let mut row = RawRow::new();
    for (column, value) in headers.iter().zip(record.iter()) {
        row.insert(column, value);
    }
    row
}
