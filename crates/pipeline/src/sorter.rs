//! Film ordering.
//!
//! Count-based modes sort by a side table of visible counts computed once
//! per pass, not inside the comparator. All modes use a stable sort, so
//! films with equal keys keep their input order.
//!
//! Runtime modes order by numeric runtime. Films whose runtime is missing
//! or not a number go after every numeric runtime, in both directions, and
//! keep their relative order among themselves.

use crate::evaluator::FilterEvaluator;
use crate::grouping::FilmGroup;
use crate::selection::{Selection, SortMode};
use std::cmp::Ordering;

/// Sort `groups` for a selection and mode. The input slice is untouched.
pub fn sort_films<'g>(
    groups: &'g [FilmGroup],
    selection: &Selection,
    mode: SortMode,
) -> Vec<&'g FilmGroup> {
    let counts = if mode.is_count_based() {
        FilterEvaluator::new(selection).visible_counts(groups)
    } else {
        Vec::new()
    };

    sorted_indices(groups, &counts, mode)
        .into_iter()
        .map(|i| &groups[i])
        .collect()
}

/// Permutation of `0..groups.len()` in display order.
///
/// `counts[i]` is the visible count of `groups[i]`; it is only read by the
/// count-based modes and may be empty otherwise. Callers in this crate
/// always pass the table from [`FilterEvaluator::visible_counts`].
pub(crate) fn sorted_indices(groups: &[FilmGroup], counts: &[usize], mode: SortMode) -> Vec<usize> {
    let mut order: Vec<usize> = (0..groups.len()).collect();

    match mode {
        SortMode::ShowtimesDesc => {
            debug_assert_eq!(counts.len(), groups.len());
            order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));
        }
        SortMode::ShowtimesAsc => {
            debug_assert_eq!(counts.len(), groups.len());
            order.sort_by_key(|&i| counts[i]);
        }
        SortMode::RuntimeDesc | SortMode::RuntimeAsc => {
            let runtimes: Vec<Option<f64>> =
                groups.iter().map(FilmGroup::runtime_minutes).collect();
            let descending = mode == SortMode::RuntimeDesc;
            order.sort_by(|&a, &b| compare_runtime(runtimes[a], runtimes[b], descending));
        }
    }

    order
}

fn compare_runtime(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            // NaN never reaches here, so partial_cmp is total
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
