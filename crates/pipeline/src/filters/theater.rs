//! Filter that keeps leaves at the selected theaters.

use crate::traits::{Filter, Leaf};
use std::collections::HashSet;

/// Keeps leaves whose theater is in the selected set.
///
/// ## Algorithm
/// HashSet membership per leaf; an empty set admits everything.
pub struct TheaterFilter {
    theaters: HashSet<String>,
}

impl TheaterFilter {
    pub fn new<I, S>(theaters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            theaters: theaters.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for TheaterFilter {
    fn name(&self) -> &str {
        "TheaterFilter"
    }

    fn admits(&self, leaf: &Leaf<'_>) -> bool {
        self.theaters.is_empty() || self.theaters.contains(leaf.theater)
    }
}
