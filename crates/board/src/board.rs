//! # Showtime Board
//!
//! This module owns the state behind a showtime listing and keeps the
//! rendered listing in sync with it:
//! 1. On load: aggregate records into film groups and derive the options
//! 2. On every selection or sort change: recount, resort and reproject
//!
//! Loading is the only expensive step and runs once per record set.
//! Each recomputation is a single pass that produces an immutable snapshot
//! (`Arc<[FilmListing]>`); readers holding an older snapshot are never
//! affected by later changes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use data_loader::{ShowtimeRecord, ShowtimeTable};
use pipeline::{FilmGroup, FilmListing, FilterOptions, Selection, SortMode, aggregate, build_listing};

/// Headline numbers for the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSummary {
    pub films: usize,
    pub showtimes: usize,
    pub visible_showtimes: usize,
}

/// Selection-driven view over one record set
#[derive(Debug, Clone)]
pub struct ShowtimeBoard {
    groups: Vec<FilmGroup>,
    options: FilterOptions,
    selection: Selection,
    sort_mode: SortMode,
    /// Fixed "today" for option computation; `None` means the local date
    today: Option<NaiveDate>,
    listing: Arc<[FilmListing]>,
}

impl ShowtimeBoard {
    /// Build a board with an unrestricted selection and the default sort.
    pub fn new(records: &[ShowtimeRecord]) -> Self {
        Self::build(records, None)
    }

    /// Like [`ShowtimeBoard::new`] but with a fixed "today".
    pub fn with_today(records: &[ShowtimeRecord], today: NaiveDate) -> Self {
        Self::build(records, Some(today))
    }

    /// Load one or more CSV files and build a board over them.
    pub fn from_files(paths: &[PathBuf]) -> Result<Self> {
        let table = ShowtimeTable::load_from_files(paths)
            .context("Failed to load showtime table")?;
        Ok(Self::new(table.records()))
    }

    fn build(records: &[ShowtimeRecord], today: Option<NaiveDate>) -> Self {
        let mut board = Self {
            groups: Vec::new(),
            options: FilterOptions::default(),
            selection: Selection::new(),
            sort_mode: SortMode::default(),
            today,
            listing: Arc::from(Vec::new()),
        };
        board.reload(records);
        board
    }

    /// Replace the record set. Regroups, rederives options and keeps the
    /// current selection and sort mode.
    pub fn reload(&mut self, records: &[ShowtimeRecord]) {
        let start_time = Instant::now();

        self.groups = aggregate(records);
        self.options = match self.today {
            Some(today) => FilterOptions::build(records, today),
            None => FilterOptions::build_for_today(records),
        };
        info!(
            "Loaded {} showtimes into {} films ({} theaters, {} upcoming dates)",
            records.len(),
            self.groups.len(),
            self.options.theaters.len(),
            self.options.dates.len()
        );

        self.recompute();
        debug!("Reload took {:.2?}", start_time.elapsed());
    }

    // Selection API -----------------------------------------------------------

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_theaters(&self) -> &[String] {
        self.selection.selected_theaters()
    }

    pub fn selected_dates(&self) -> &[String] {
        self.selection.selected_dates()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.recompute();
    }

    pub fn set_selected_theaters<I, S>(&mut self, theaters: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.set_theaters(theaters);
        self.recompute();
    }

    pub fn set_selected_dates<I, S>(&mut self, dates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.set_dates(dates);
        self.recompute();
    }

    pub fn toggle_theater(&mut self, theater: &str) {
        self.selection.toggle_theater(theater);
        self.recompute();
    }

    pub fn toggle_date(&mut self, date: &str) {
        self.selection.toggle_date(date);
        self.recompute();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.recompute();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        if mode == self.sort_mode {
            return;
        }
        self.sort_mode = mode;
        self.recompute();
    }

    // Outputs -----------------------------------------------------------------

    /// Current listing snapshot, already filtered and sorted.
    pub fn listing(&self) -> Arc<[FilmListing]> {
        Arc::clone(&self.listing)
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn groups(&self) -> &[FilmGroup] {
        &self.groups
    }

    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            films: self.groups.len(),
            showtimes: self.groups.iter().map(FilmGroup::total_showtimes).sum(),
            visible_showtimes: self.listing.iter().map(|f| f.visible_count).sum(),
        }
    }

    /// Rebuild the snapshot from the grouping, selection and sort mode.
    fn recompute(&mut self) {
        let start_time = Instant::now();
        self.listing = build_listing(&self.groups, &self.selection, self.sort_mode).into();
        debug!(
            "Recomputed listing: {} films, theaters={:?}, dates={:?}, sort={} in {:.2?}",
            self.listing.len(),
            self.selection.selected_theaters(),
            self.selection.selected_dates(),
            self.sort_mode,
            start_time.elapsed()
        );
    }
}
