//! The FilterPipeline combines leaf filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern. A leaf is visible when every filter
//! admits it; an empty pipeline admits everything.

use crate::filters::{DateFilter, TheaterFilter};
use crate::selection::Selection;
use crate::traits::{Filter, Leaf};

/// Chains multiple filters together.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TheaterFilter::new(["Music Box"]))
///     .add_filter(DateFilter::new(["1/1/2030"]));
///
/// assert!(pipeline.admits(&Leaf::new("1/1/2030", "Music Box")));
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a selection.
    ///
    /// Only restricted dimensions get a filter, so an unrestricted selection
    /// yields an empty pipeline.
    pub fn from_selection(selection: &Selection) -> Self {
        let mut pipeline = Self::theaters_of(selection);
        if !selection.selected_dates().is_empty() {
            pipeline =
                pipeline.add_filter(DateFilter::new(selection.selected_dates().iter().cloned()));
        }

        tracing::debug!("Filter pipeline built: [{}]", pipeline.names().join(", "));
        pipeline
    }

    /// Pipeline for the theater dimension of a selection only.
    ///
    /// Used where the date is already fixed, e.g. the theaters listed under
    /// one date bucket.
    pub fn theaters_of(selection: &Selection) -> Self {
        let pipeline = Self::new();
        if selection.selected_theaters().is_empty() {
            return pipeline;
        }
        pipeline.add_filter(TheaterFilter::new(
            selection.selected_theaters().iter().cloned(),
        ))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Whether every filter admits the leaf.
    pub fn admits(&self, leaf: &Leaf<'_>) -> bool {
        self.filters.iter().all(|filter| filter.admits(leaf))
    }

    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
