//! Row sanitizing.
//!
//! Keeps only the rows that have both a film and a date, in their original
//! order. Nothing else is normalized: theater, time, runtime and poster pass
//! through as they are, absent or not. Dropped rows are not reported as
//! errors.

use crate::types::{COL_DATE, COL_FILM, RawRow, ShowtimeRecord};

/// True when the row carries a non-empty film and a non-empty date.
pub fn is_complete(row: &RawRow) -> bool {
    row.get(COL_FILM).is_some() && row.get(COL_DATE).is_some()
}

/// Drop incomplete rows and convert the rest, preserving order.
pub fn sanitize(rows: &[RawRow]) -> Vec<ShowtimeRecord> {
    rows.iter()
        .filter(|row| is_complete(row))
        .filter_map(ShowtimeRecord::from_raw)
        .collect()
}
