//! Property tests for grouping, visible counts and sorting.

use data_loader::ShowtimeRecord;
use pipeline::{FilmGroup, FilterEvaluator, Selection, SortMode, aggregate, sort_films};
use proptest::prelude::*;

const FILMS: [&str; 5] = ["Jaws", "Alien", "Heat", "Brazil", "Ran"];
const THEATERS: [&str; 3] = ["Music Box", "Davis", "Siskel"];
const DATES: [&str; 4] = ["12/31/2029", "1/1/2030", "1/2/2030", "01/02/2030"];
const RUNTIMES: [&str; 4] = ["90", "124", "TBD", "90"];

fn record_strategy() -> impl Strategy<Value = ShowtimeRecord> {
    (0..FILMS.len(), 0..THEATERS.len(), 0..DATES.len(), 0..24u32).prop_map(
        |(film, theater, date, hour)| {
            ShowtimeRecord::new(
                FILMS[film],
                THEATERS[theater],
                DATES[date],
                format!("{}:00", hour),
                RUNTIMES[film % RUNTIMES.len()],
            )
        },
    )
}

fn selection_strategy() -> impl Strategy<Value = Selection> {
    (
        proptest::sample::subsequence(THEATERS.to_vec(), 0..=THEATERS.len()),
        proptest::sample::subsequence(DATES.to_vec(), 0..=DATES.len()),
    )
        .prop_map(|(theaters, dates)| Selection::new().with_theaters(theaters).with_dates(dates))
}

fn mode_strategy() -> impl Strategy<Value = SortMode> {
    proptest::sample::select(SortMode::ALL.to_vec())
}

fn film_names(groups: &[&FilmGroup]) -> Vec<String> {
    groups.iter().map(|g| g.film.clone()).collect()
}

proptest! {
    /// Property: grouping neither loses nor duplicates a showtime.
    #[test]
    fn grouping_preserves_every_row(records in prop::collection::vec(record_strategy(), 0..60)) {
        let groups = aggregate(&records);
        let total: usize = groups.iter().map(|g| g.total_showtimes()).sum();
        prop_assert_eq!(total, records.len());

        for group in &groups {
            for (date, theater, times) in group.leaves() {
                let expected: Vec<String> = records
                    .iter()
                    .filter(|r| r.film == group.film && r.date == date && r.theater.as_deref() == Some(theater))
                    .filter_map(|r| r.time.clone())
                    .collect();
                prop_assert_eq!(times.to_vec(), expected);
            }
        }
    }

    /// Property: visible counts add up to the rows matching the selection.
    #[test]
    fn visible_counts_match_row_predicate(
        records in prop::collection::vec(record_strategy(), 0..60),
        selection in selection_strategy(),
    ) {
        let groups = aggregate(&records);
        let evaluator = FilterEvaluator::new(&selection);

        let visible: usize = evaluator.visible_counts(&groups).iter().sum();
        let matching = records
            .iter()
            .filter(|r| selection.admits(&r.date, r.theater.as_deref().unwrap_or("")))
            .count();
        prop_assert_eq!(visible, matching);
    }

    /// Property: an unrestricted selection shows every showtime.
    #[test]
    fn unrestricted_count_is_total(records in prop::collection::vec(record_strategy(), 0..60)) {
        let groups = aggregate(&records);
        let selection = Selection::new();
        let evaluator = FilterEvaluator::new(&selection);

        for group in &groups {
            prop_assert_eq!(evaluator.visible_count(group), group.total_showtimes());
        }
    }

    /// Property: sorting is a permutation of its input.
    #[test]
    fn sort_is_permutation(
        records in prop::collection::vec(record_strategy(), 0..60),
        selection in selection_strategy(),
        mode in mode_strategy(),
    ) {
        let groups = aggregate(&records);
        let sorted = sort_films(&groups, &selection, mode);

        let mut sorted_names = film_names(&sorted);
        let mut input_names: Vec<String> = groups.iter().map(|g| g.film.clone()).collect();
        sorted_names.sort();
        input_names.sort();
        prop_assert_eq!(sorted_names, input_names);
    }

    /// Property: showtimes-desc is non-increasing and stable on ties.
    #[test]
    fn showtimes_desc_is_ordered_and_stable(
        records in prop::collection::vec(record_strategy(), 0..60),
        selection in selection_strategy(),
    ) {
        let groups = aggregate(&records);
        let evaluator = FilterEvaluator::new(&selection);
        let sorted = sort_films(&groups, &selection, SortMode::ShowtimesDesc);

        let position = |film: &str| groups.iter().position(|g| g.film == film).unwrap();
        for pair in sorted.windows(2) {
            let (a, b) = (evaluator.visible_count(pair[0]), evaluator.visible_count(pair[1]));
            prop_assert!(a >= b);
            if a == b {
                prop_assert!(position(&pair[0].film) < position(&pair[1].film));
            }
        }
    }

    /// Property: numeric runtimes come first and are ordered, in both
    /// directions; equal and non-numeric runtimes keep first-seen order.
    #[test]
    fn runtime_sort_puts_numeric_first(
        records in prop::collection::vec(record_strategy(), 0..60),
        descending in any::<bool>(),
    ) {
        let groups = aggregate(&records);
        let mode = if descending { SortMode::RuntimeDesc } else { SortMode::RuntimeAsc };
        let sorted = sort_films(&groups, &Selection::new(), mode);

        let runtimes: Vec<Option<f64>> = sorted.iter().map(|g| g.runtime_minutes()).collect();
        let numeric = runtimes.iter().take_while(|r| r.is_some()).count();
        prop_assert!(runtimes[numeric..].iter().all(Option::is_none));

        for pair in runtimes[..numeric].windows(2) {
            let (a, b) = (pair[0].unwrap(), pair[1].unwrap());
            if descending {
                prop_assert!(a >= b);
            } else {
                prop_assert!(a <= b);
            }
        }

        let position = |film: &str| groups.iter().position(|g| g.film == film).unwrap();
        for (pair, keys) in sorted.windows(2).zip(runtimes.windows(2)) {
            if keys[0] == keys[1] {
                prop_assert!(position(&pair[0].film) < position(&pair[1].film));
            }
        }
    }
}
