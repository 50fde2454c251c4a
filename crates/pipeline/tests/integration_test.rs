//! Integration tests for the pipeline.
//!
//! These run raw rows through sanitizing, grouping, filtering and sorting
//! the way a renderer would.

use chrono::NaiveDate;
use data_loader::{
    COL_DATE, COL_FILM, COL_POSTER, COL_RUNTIME, COL_THEATER, COL_TIME, RawRow, sanitize,
};
use pipeline::{
    FilterEvaluator, FilterOptions, Selection, SortMode, aggregate, build_listing, find_group,
    sort_films, visible_count,
};

fn row(film: &str, theater: &str, date: &str, time: &str, runtime: &str) -> RawRow {
    RawRow::new()
        .with(COL_FILM, film)
        .with(COL_THEATER, theater)
        .with(COL_DATE, date)
        .with(COL_TIME, time)
        .with(COL_RUNTIME, runtime)
}

/// Film A twice (X and Y), film B once (X), all on 1/1/2030.
fn reference_rows() -> Vec<RawRow> {
    vec![
        row("A", "X", "1/1/2030", "7:00", "90"),
        row("A", "Y", "1/1/2030", "8:00", "90"),
        row("B", "X", "1/1/2030", "9:00", "120"),
    ]
}

#[test]
fn test_reference_example_unrestricted() {
    let records = sanitize(&reference_rows());
    let groups = aggregate(&records);

    let listing = build_listing(&groups, &Selection::new(), SortMode::ShowtimesDesc);

    let order: Vec<(&str, usize)> = listing
        .iter()
        .map(|f| (f.film.as_str(), f.visible_count))
        .collect();
    assert_eq!(order, vec![("A", 2), ("B", 1)]);
}

#[test]
fn test_reference_example_theater_y() {
    let records = sanitize(&reference_rows());
    let groups = aggregate(&records);
    let selection = Selection::new().with_theaters(["Y"]);

    let a = find_group(&groups, "A").unwrap();
    let b = find_group(&groups, "B").unwrap();
    assert_eq!(visible_count(a, &selection), 1);
    assert_eq!(visible_count(b, &selection), 0);

    let listing = build_listing(&groups, &selection, SortMode::ShowtimesDesc);
    let films: Vec<&str> = listing.iter().map(|f| f.film.as_str()).collect();
    assert_eq!(films, vec!["A", "B"]);
}

#[test]
fn test_reference_example_date_options() {
    let rows = vec![
        row("A", "X", "12/31/2029", "7:00", "90"),
        row("A", "X", "1/1/2030", "7:00", "90"),
        row("A", "X", "1/2/2030", "7:00", "90"),
    ];
    let records = sanitize(&rows);
    let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

    let options = FilterOptions::build(&records, today);
    assert_eq!(options.dates, vec!["1/1/2030", "1/2/2030"]);
    assert_eq!(options.theaters, vec!["X"]);
}

#[test]
fn test_stale_past_date_selection_is_honored() {
    let rows = vec![
        row("A", "X", "12/31/2029", "7:00", "90"),
        row("A", "X", "1/1/2030", "7:00", "90"),
    ];
    let groups = aggregate(&sanitize(&rows));
    let selection = Selection::new().with_dates(["12/31/2029"]);

    let listing = build_listing(&groups, &selection, SortMode::ShowtimesDesc);
    assert_eq!(listing[0].visible_count, 1);
    assert_eq!(listing[0].visible_dates[0].date, "12/31/2029");
}

#[test]
fn test_malformed_rows_never_reach_the_grouping() {
    let mut rows = reference_rows();
    rows.push(RawRow::new().with(COL_THEATER, "X").with(COL_TIME, "10:00"));
    rows.push(row("", "X", "1/1/2030", "11:00", "90"));
    rows.push(row("C", "X", "", "11:00", "90"));

    let groups = aggregate(&sanitize(&rows));
    let total: usize = groups.iter().map(|g| g.total_showtimes()).sum();

    assert_eq!(groups.len(), 2);
    assert_eq!(total, 3);
}

#[test]
fn test_runtime_sort_with_poster_and_missing_runtime() {
    let rows = vec![
        row("Short", "X", "1/1/2030", "7:00", "80").with(COL_POSTER, "short.jpg"),
        RawRow::new()
            .with(COL_FILM, "Unknown")
            .with(COL_THEATER, "X")
            .with(COL_DATE, "1/1/2030")
            .with(COL_TIME, "8:00"),
        row("Long", "X", "1/1/2030", "9:00", "200"),
    ];
    let groups = aggregate(&sanitize(&rows));

    let desc = sort_films(&groups, &Selection::new(), SortMode::RuntimeDesc);
    let films: Vec<&str> = desc.iter().map(|g| g.film.as_str()).collect();
    assert_eq!(films, vec!["Long", "Short", "Unknown"]);

    let listing = build_listing(&groups, &Selection::new(), SortMode::RuntimeAsc);
    assert_eq!(listing[0].film, "Short");
    assert_eq!(listing[0].poster_url.as_deref(), Some("short.jpg"));
    assert_eq!(listing[2].film, "Unknown");
    assert_eq!(listing[2].runtime, None);
}

#[test]
fn test_selection_changes_do_not_need_regrouping() {
    let groups = aggregate(&sanitize(&reference_rows()));
    let mut selection = Selection::new();

    selection.toggle_theater("X");
    let x_only = build_listing(&groups, &selection, SortMode::ShowtimesAsc);
    assert_eq!(x_only[0].visible_count, 1);
    assert_eq!(x_only[1].visible_count, 1);

    selection.toggle_theater("X");
    let all = build_listing(&groups, &selection, SortMode::ShowtimesAsc);
    let films: Vec<&str> = all.iter().map(|f| f.film.as_str()).collect();
    assert_eq!(films, vec!["B", "A"]);

    let evaluator = FilterEvaluator::new(&selection);
    assert_eq!(evaluator.visible_counts(&groups), vec![2, 1]);
}
