//! Core traits for the listing filters.
//!
//! A film's showtimes are nested date -> theater -> times. Filtering works
//! on the (date, theater) leaves: a leaf is visible when every filter in the
//! pipeline admits it.

/// One (date, theater) position inside a film's grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf<'a> {
    pub date: &'a str,
    pub theater: &'a str,
}

impl<'a> Leaf<'a> {
    pub fn new(date: &'a str, theater: &'a str) -> Self {
        Self { date, theater }
    }
}

/// Core trait for filtering showtime leaves.
///
/// ## Design Note
/// - `Send + Sync` lets visible counts be computed in parallel
/// - Filters must be pure: the same leaf always gets the same answer
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether the leaf passes this filter.
    fn admits(&self, leaf: &Leaf<'_>) -> bool;
}
