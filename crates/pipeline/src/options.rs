//! Selectable filter options derived from the record set.
//!
//! Theaters are offered in plain lexicographic order. Dates are offered
//! only when they are today or later, ordered by calendar date rather than
//! by text, and labelled with their original text.

use chrono::NaiveDate;
use data_loader::{ShowtimeRecord, parse_show_date};
use serde::Serialize;
use std::collections::BTreeSet;

/// The two option lists shown in the filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub theaters: Vec<String>,
    pub dates: Vec<String>,
}

impl FilterOptions {
    /// Derive both option lists, treating `today` as the earliest
    /// selectable date.
    pub fn build(records: &[ShowtimeRecord], today: NaiveDate) -> Self {
        let options = Self {
            theaters: theater_options(records),
            dates: date_options(records, today),
        };
        tracing::debug!(
            "Options built: {} theaters, {} upcoming dates (today = {})",
            options.theaters.len(),
            options.dates.len(),
            today
        );
        options
    }

    /// Same as [`FilterOptions::build`] with the local calendar date.
    pub fn build_for_today(records: &[ShowtimeRecord]) -> Self {
        Self::build(records, data_loader::today())
    }
}

/// Distinct theater names, ascending. Records without a theater add nothing.
pub fn theater_options(records: &[ShowtimeRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.theater.as_deref())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct date labels on or after `today`, in calendar order.
///
/// Labels that fail to parse are left out. Two spellings of the same day
/// ("1/2/2030" and "01/02/2030") are both kept, ordered by their text.
pub fn date_options(records: &[ShowtimeRecord], today: NaiveDate) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| {
            let date = parse_show_date(&r.date)?;
            (date >= today).then_some((date, r.date.as_str()))
        })
        .collect::<BTreeSet<(NaiveDate, &str)>>()
        .into_iter()
        .map(|(_, label)| label.to_string())
        .collect()
}
