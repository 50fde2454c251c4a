//! Listing pipeline: grouping, filtering and sorting of movie showtimes.
//!
//! This crate provides:
//! - FilterOptions for the theater and date dropdowns
//! - `aggregate` to nest records by film, date and theater
//! - Filter trait and implementations for (date, theater) leaves
//! - FilterEvaluator for visible counts, dates and theaters
//! - Sorting by visible count or runtime
//! - `build_listing`, the pre-filtered, pre-sorted output for renderers
//!
//! ## Architecture
//! The grouping is built once per load. Every selection or sort change
//! reruns only the cheap stages:
//! 1. FilterEvaluator computes visible counts (once per film)
//! 2. The sorter orders films by those counts or by runtime
//! 3. The listing projects visible dates and theaters
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{aggregate, build_listing, FilterOptions, Selection, SortMode};
//!
//! let groups = aggregate(table.records());
//! let options = FilterOptions::build_for_today(table.records());
//!
//! let selection = Selection::new().with_theaters(["Music Box"]);
//! let listing = build_listing(&groups, &selection, SortMode::ShowtimesDesc);
//! ```

pub mod evaluator;
pub mod filter_pipeline;
pub mod filters;
pub mod grouping;
pub mod listing;
pub mod options;
pub mod selection;
pub mod sorter;
pub mod traits;

// Re-export main types
pub use evaluator::{FilterEvaluator, visible_count};
pub use filter_pipeline::FilterPipeline;
pub use grouping::{DateBucket, FilmGroup, TheaterBucket, aggregate, find_group};
pub use listing::{DateListing, FilmListing, TheaterListing, build_listing};
pub use options::{FilterOptions, date_options, theater_options};
pub use selection::{ParseSortModeError, Selection, SortMode, summary_label};
pub use sorter::sort_films;
pub use traits::{Filter, Leaf};
