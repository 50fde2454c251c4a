//! Aggregation of sanitized records into per-film groups.
//!
//! Each film gets one `FilmGroup` holding its showtimes nested by date,
//! then theater, then time label. All three levels keep first-seen order.
//! The grouping does not depend on the selection, so it is built once per
//! load and reused for every filter or sort change.

use data_loader::{ShowtimeRecord, parse_runtime};
use serde::Serialize;
use std::collections::HashMap;

/// Time labels for one theater on one date, in source-row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TheaterBucket {
    pub theater: String,
    pub times: Vec<String>,
}

/// All theaters showing a film on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateBucket {
    pub date: String,
    pub theaters: Vec<TheaterBucket>,
}

impl DateBucket {
    pub fn theater(&self, theater: &str) -> Option<&TheaterBucket> {
        self.theaters.iter().find(|b| b.theater == theater)
    }

    pub fn showtime_count(&self) -> usize {
        self.theaters.iter().map(|b| b.times.len()).sum()
    }
}

/// Aggregation root: one per distinct film.
///
/// `runtime` and `poster_url` come from the film's first record. Later rows
/// with different values are ignored, not reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmGroup {
    pub film: String,
    pub runtime: Option<String>,
    pub poster_url: Option<String>,
    pub dates: Vec<DateBucket>,
}

impl FilmGroup {
    fn from_first_record(record: &ShowtimeRecord) -> Self {
        Self {
            film: record.film.clone(),
            runtime: record.runtime.clone(),
            poster_url: record.poster_url.clone(),
            dates: Vec::new(),
        }
    }

    /// Numeric runtime, `None` when missing or non-numeric.
    pub fn runtime_minutes(&self) -> Option<f64> {
        parse_runtime(self.runtime.as_deref())
    }

    pub fn date(&self, date: &str) -> Option<&DateBucket> {
        self.dates.iter().find(|b| b.date == date)
    }

    /// Unfiltered number of showtimes.
    pub fn total_showtimes(&self) -> usize {
        self.dates.iter().map(DateBucket::showtime_count).sum()
    }

    /// Every (date, theater, times) leaf in grouping order.
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &str, &[String])> {
        self.dates.iter().flat_map(|d| {
            d.theaters
                .iter()
                .map(move |t| (d.date.as_str(), t.theater.as_str(), t.times.as_slice()))
        })
    }

    fn push(&mut self, date: &str, theater: &str, time: &str) {
        let date_pos = match self.dates.iter().position(|b| b.date == date) {
            Some(pos) => pos,
            None => {
                self.dates.push(DateBucket {
                    date: date.to_string(),
                    theaters: Vec::new(),
                });
                self.dates.len() - 1
            }
        };

        let theaters = &mut self.dates[date_pos].theaters;
        let theater_pos = match theaters.iter().position(|b| b.theater == theater) {
            Some(pos) => pos,
            None => {
                theaters.push(TheaterBucket {
                    theater: theater.to_string(),
                    times: Vec::new(),
                });
                theaters.len() - 1
            }
        };

        theaters[theater_pos].times.push(time.to_string());
    }
}

/// Group sanitized records by film, date and theater.
///
/// Films come out in first-seen order. Nothing downstream relies on that
/// order; the sorter always reorders explicitly. A record without a theater
/// lands in the `""` theater bucket and a record without a time adds an
/// empty label, so every input record is represented by exactly one time.
pub fn aggregate(records: &[ShowtimeRecord]) -> Vec<FilmGroup> {
    let mut groups: Vec<FilmGroup> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let pos = *positions.entry(record.film.as_str()).or_insert_with(|| {
            groups.push(FilmGroup::from_first_record(record));
            groups.len() - 1
        });

        groups[pos].push(
            &record.date,
            record.theater.as_deref().unwrap_or(""),
            record.time.as_deref().unwrap_or(""),
        );
    }

    tracing::debug!(
        "Aggregated {} records into {} films",
        records.len(),
        groups.len()
    );
    groups
}

/// Look up a film's group by name.
pub fn find_group<'g>(groups: &'g [FilmGroup], film: &str) -> Option<&'g FilmGroup> {
    groups.iter().find(|g| g.film == film)
}
