//! # Data Loader Crate
//!
//! This crate acquires the showtime table and turns it into sanitized
//! records for the listing pipeline.
//!
//! ## Main Components
//!
//! - **types**: Raw rows, showtime records and the owned `ShowtimeTable`
//! - **parser**: Parse CSV files into raw rows
//! - **sanitize**: Drop rows without a film or a date
//! - **date**: Parse the `M/D/YYYY` date column
//! - **load**: Load (and merge) one or more CSV files
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::ShowtimeTable;
//! use std::path::Path;
//!
//! let table = ShowtimeTable::load_from_file(Path::new("showtimes_history.csv"))?;
//! let (kept, dropped) = table.counts();
//! println!("{} showtimes ({} incomplete rows dropped)", kept, dropped);
//! ```

// Public modules
pub mod date;
pub mod error;
pub mod load;
pub mod parser;
pub mod sanitize;
pub mod types;

// Re-export commonly used types for convenience
pub use date::{is_today_or_future, parse_show_date, today};
pub use error::{DataLoadError, Result};
pub use sanitize::{is_complete, sanitize};
pub use types::{
    COL_DATE, COL_FILM, COL_POSTER, COL_RUNTIME, COL_THEATER, COL_TIME, RawRow, ShowtimeRecord,
    ShowtimeTable, parse_runtime,
};
