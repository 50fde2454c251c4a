//! The fully filtered, fully sorted listing handed to a renderer.
//!
//! A renderer walks `FilmListing -> DateListing -> TheaterListing -> times`
//! and needs no filtering logic of its own. Films with zero visible
//! showtimes are still listed; hiding them is the renderer's call.

use crate::evaluator::FilterEvaluator;
use crate::grouping::FilmGroup;
use crate::selection::{Selection, SortMode};
use crate::sorter::sorted_indices;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmListing {
    pub film: String,
    pub runtime: Option<String>,
    pub poster_url: Option<String>,
    pub visible_count: usize,
    pub visible_dates: Vec<DateListing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateListing {
    pub date: String,
    pub theaters: Vec<TheaterListing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TheaterListing {
    pub theater: String,
    pub times: Vec<String>,
}

/// Run one recomputation pass: count, sort and project every film.
pub fn build_listing(groups: &[FilmGroup], selection: &Selection, mode: SortMode) -> Vec<FilmListing> {
    let evaluator = FilterEvaluator::new(selection);
    let counts = evaluator.visible_counts(groups);
    let order = sorted_indices(groups, &counts, mode);

    tracing::debug!(
        "Listing rebuilt: {} films, {} visible showtimes, sort {}",
        groups.len(),
        counts.iter().sum::<usize>(),
        mode
    );

    order
        .into_iter()
        .map(|i| project(&evaluator, &groups[i], counts[i]))
        .collect()
}

fn project(evaluator: &FilterEvaluator<'_>, group: &FilmGroup, visible_count: usize) -> FilmListing {
    let visible_dates = evaluator
        .visible_dates(group)
        .into_iter()
        .map(|bucket| DateListing {
            date: bucket.date.clone(),
            theaters: evaluator
                .theaters_in(bucket)
                .into_iter()
                .map(|t| TheaterListing {
                    theater: t.theater.clone(),
                    times: t.times.clone(),
                })
                .collect(),
        })
        .collect();

    FilmListing {
        film: group.film.clone(),
        runtime: group.runtime.clone(),
        poster_url: group.poster_url.clone(),
        visible_count,
        visible_dates,
    }
}
