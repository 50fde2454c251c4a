//! Calendar-date handling for the `Date` column.
//!
//! The table writes dates as `M/D/YYYY` with or without zero padding.
//! Parsing yields a `NaiveDate` (no time zone). The raw text is kept
//! everywhere else so that option labels match the data exactly.

use chrono::{Local, NaiveDate};

/// Parse `M/D/YYYY` or `MM/DD/YYYY`.
///
/// Example: "1/2/2025" -> 2025-01-02
///          "12/01/2025" -> 2025-12-01
///          "2025-01-02" -> None
pub fn parse_show_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('/');

    let month = parse_part(parts.next()?)?;
    let day = parse_part(parts.next()?)?;
    let year = parse_part(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn parse_part(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Today's local calendar date, time of day dropped.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// True when `text` parses to a date on or after `today`.
/// Unparseable text is never "today or future".
pub fn is_today_or_future(text: &str, today: NaiveDate) -> bool {
    parse_show_date(text).is_some_and(|date| date >= today)
}
