//! Board crate for the showtime listing.
//!
//! This crate holds the state a listing UI mutates (theater and date
//! selection, sort mode) and recomputes the filtered, sorted listing
//! whenever that state changes.

pub mod board;

pub use board::{BoardSummary, ShowtimeBoard};
