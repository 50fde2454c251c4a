//! Filter that keeps leaves on the selected dates.
//!
//! Dates are compared as raw text, so "1/2/2030" and "01/02/2030" are
//! different selections. Past dates are honored like any other: the option
//! list hides them, this filter does not.

use crate::traits::{Filter, Leaf};
use std::collections::HashSet;

/// Keeps leaves whose date text is in the selected set.
pub struct DateFilter {
    dates: HashSet<String>,
}

impl DateFilter {
    pub fn new<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dates: dates.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for DateFilter {
    fn name(&self) -> &str {
        "DateFilter"
    }

    fn admits(&self, leaf: &Leaf<'_>) -> bool {
        self.dates.is_empty() || self.dates.contains(leaf.date)
    }
}
