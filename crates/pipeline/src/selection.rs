//! User-driven listing state: which theaters and dates are selected, and
//! how films are ordered.
//!
//! An empty dimension means "no restriction", never "match nothing".

use crate::filter_pipeline::FilterPipeline;
use crate::traits::Leaf;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The current theater/date filter.
///
/// Both dimensions behave as sets for membership, but remember the order
/// in which values were selected: `visible_dates` lists selected dates in
/// that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    theaters: Vec<String>,
    dates: Vec<String>,
}

impl Selection {
    /// An unrestricted selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theaters<I, S>(mut self, theaters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_theaters(theaters);
        self
    }

    pub fn with_dates<I, S>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_dates(dates);
        self
    }

    /// Replace the selected theaters. Duplicates keep their first position.
    pub fn set_theaters<I, S>(&mut self, theaters: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.theaters = dedup_in_order(theaters);
    }

    /// Replace the selected dates (raw option text, not parsed dates).
    pub fn set_dates<I, S>(&mut self, dates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dates = dedup_in_order(dates);
    }

    /// Checkbox behaviour: select if absent, deselect if present.
    pub fn toggle_theater(&mut self, theater: &str) {
        toggle(&mut self.theaters, theater);
    }

    pub fn toggle_date(&mut self, date: &str) {
        toggle(&mut self.dates, date);
    }

    pub fn clear(&mut self) {
        self.theaters.clear();
        self.dates.clear();
    }

    pub fn selected_theaters(&self) -> &[String] {
        &self.theaters
    }

    pub fn selected_dates(&self) -> &[String] {
        &self.dates
    }

    pub fn is_unrestricted(&self) -> bool {
        self.theaters.is_empty() && self.dates.is_empty()
    }

    /// Whether a (date, theater) leaf passes this selection.
    ///
    /// One-off check; when testing many leaves build a
    /// [`FilterPipeline`] once instead.
    pub fn admits(&self, date: &str, theater: &str) -> bool {
        FilterPipeline::from_selection(self).admits(&Leaf::new(date, theater))
    }
}

fn dedup_in_order<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.into();
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

fn toggle(values: &mut Vec<String>, value: &str) {
    match values.iter().position(|v| v == value) {
        Some(pos) => {
            values.remove(pos);
        }
        None => values.push(value.to_string()),
    }
}

/// Dropdown button text: "Theater" with nothing selected, "Theater (2)" otherwise.
pub fn summary_label(label: &str, selected: usize) -> String {
    if selected == 0 {
        label.to_string()
    } else {
        format!("{} ({})", label, selected)
    }
}

// =============================================================================
// SortMode
// =============================================================================

/// Film ordering strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Most visible showtimes first
    #[default]
    ShowtimesDesc,
    ShowtimesAsc,
    /// Longest runtime first
    RuntimeDesc,
    RuntimeAsc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::ShowtimesDesc,
        SortMode::ShowtimesAsc,
        SortMode::RuntimeDesc,
        SortMode::RuntimeAsc,
    ];

    /// Stable identifier, e.g. "showtimes-desc".
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::ShowtimesDesc => "showtimes-desc",
            SortMode::ShowtimesAsc => "showtimes-asc",
            SortMode::RuntimeDesc => "runtime-desc",
            SortMode::RuntimeAsc => "runtime-asc",
        }
    }

    /// Human-readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::ShowtimesDesc => "Showtimes (Most to Least)",
            SortMode::ShowtimesAsc => "Showtimes (Least to Most)",
            SortMode::RuntimeDesc => "Runtime (Longest to Shortest)",
            SortMode::RuntimeAsc => "Runtime (Shortest to Longest)",
        }
    }

    pub fn is_count_based(self) -> bool {
        matches!(self, SortMode::ShowtimesDesc | SortMode::ShowtimesAsc)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort mode '{0}' (expected showtimes-desc, showtimes-asc, runtime-desc or runtime-asc)")]
pub struct ParseSortModeError(pub String);

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| ParseSortModeError(s.to_string()))
    }
}
