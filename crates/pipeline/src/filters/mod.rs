//! Filter implementations for the listing pipeline.
//!
//! One filter per selection dimension. Each admits every leaf when its
//! value set is empty.

pub mod date;
pub mod theater;

// Re-export for convenience
pub use date::DateFilter;
pub use theater::TheaterFilter;
