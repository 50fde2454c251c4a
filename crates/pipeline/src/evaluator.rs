//! Visibility of a film's showtimes under a selection.
//!
//! Everything here is pure: the same group and selection always give the
//! same counts and the same visible dates and theaters.

use crate::filter_pipeline::FilterPipeline;
use crate::grouping::{DateBucket, FilmGroup, TheaterBucket};
use crate::selection::Selection;
use crate::traits::Leaf;
use rayon::prelude::*;

/// Evaluates groups against one selection.
///
/// Build one per recomputation pass; the filter pipelines are derived from
/// the selection once and reused for every film.
pub struct FilterEvaluator<'s> {
    selection: &'s Selection,
    pipeline: FilterPipeline,
    /// Theater dimension only, for listing theaters under a known date
    theaters: FilterPipeline,
}

impl<'s> FilterEvaluator<'s> {
    pub fn new(selection: &'s Selection) -> Self {
        Self {
            selection,
            pipeline: FilterPipeline::from_selection(selection),
            theaters: FilterPipeline::theaters_of(selection),
        }
    }

    pub fn selection(&self) -> &Selection {
        self.selection
    }

    pub fn admits(&self, date: &str, theater: &str) -> bool {
        self.pipeline.admits(&Leaf::new(date, theater))
    }

    /// Number of time labels whose (date, theater) leaf is admitted.
    pub fn visible_count(&self, group: &FilmGroup) -> usize {
        group
            .leaves()
            .filter(|(date, theater, _)| self.admits(date, theater))
            .map(|(_, _, times)| times.len())
            .sum()
    }

    /// Visible count for every group, same order as `groups`.
    pub fn visible_counts(&self, groups: &[FilmGroup]) -> Vec<usize> {
        groups.par_iter().map(|g| self.visible_count(g)).collect()
    }

    /// Dates to show for a film.
    ///
    /// With dates selected: the selected dates, in selection order, that the
    /// film has a bucket for. Otherwise every date in grouping order. The
    /// theater selection does not affect which dates are listed.
    pub fn visible_dates<'g>(&self, group: &'g FilmGroup) -> Vec<&'g DateBucket> {
        let selected = self.selection.selected_dates();
        if selected.is_empty() {
            group.dates.iter().collect()
        } else {
            selected.iter().filter_map(|d| group.date(d)).collect()
        }
    }

    /// Theaters to show under one of the film's dates, in grouping order.
    /// Empty when the film has no bucket for `date`.
    pub fn visible_theaters<'g>(&self, group: &'g FilmGroup, date: &str) -> Vec<&'g TheaterBucket> {
        group
            .date(date)
            .map(|bucket| self.theaters_in(bucket))
            .unwrap_or_default()
    }

    pub(crate) fn theaters_in<'g>(&self, bucket: &'g DateBucket) -> Vec<&'g TheaterBucket> {
        bucket
            .theaters
            .iter()
            .filter(|t| self.theaters.admits(&Leaf::new(&bucket.date, &t.theater)))
            .collect()
    }
}

/// Shorthand for a one-off count.
pub fn visible_count(group: &FilmGroup, selection: &Selection) -> usize {
    FilterEvaluator::new(selection).visible_count(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::aggregate;
    use data_loader::ShowtimeRecord;

    fn jaws() -> FilmGroup {
        let records = vec![
            ShowtimeRecord::new("Jaws", "Music Box", "1/1/2030", "7:00 PM", "124"),
            ShowtimeRecord::new("Jaws", "Davis", "1/1/2030", "8:00 PM", "124"),
            ShowtimeRecord::new("Jaws", "Davis", "1/1/2030", "10:00 PM", "124"),
            ShowtimeRecord::new("Jaws", "Music Box", "1/2/2030", "6:00 PM", "124"),
            ShowtimeRecord::new("Jaws", "Siskel", "1/3/2030", "5:00 PM", "124"),
        ];
        aggregate(&records).remove(0)
    }

    fn dates(buckets: &[&DateBucket]) -> Vec<String> {
        buckets.iter().map(|b| b.date.clone()).collect()
    }

    #[test]
    fn test_unrestricted_count_is_total() {
        let group = jaws();
        assert_eq!(visible_count(&group, &Selection::new()), group.total_showtimes());
        assert_eq!(group.total_showtimes(), 5);
    }

    #[test]
    fn test_count_by_theater_and_date() {
        let group = jaws();

        let davis = Selection::new().with_theaters(["Davis"]);
        assert_eq!(visible_count(&group, &davis), 2);

        let first_day = Selection::new().with_dates(["1/1/2030"]);
        assert_eq!(visible_count(&group, &first_day), 3);

        let both = Selection::new()
            .with_theaters(["Music Box"])
            .with_dates(["1/1/2030", "1/2/2030"]);
        assert_eq!(visible_count(&group, &both), 2);

        let nowhere = Selection::new().with_theaters(["Nowhere"]);
        assert_eq!(visible_count(&group, &nowhere), 0);
    }

    #[test]
    fn test_visible_dates_follow_selection_order() {
        let group = jaws();
        let selection = Selection::new().with_dates(["1/3/2030", "2/2/2030", "1/1/2030"]);
        let evaluator = FilterEvaluator::new(&selection);

        assert_eq!(
            dates(&evaluator.visible_dates(&group)),
            vec!["1/3/2030", "1/1/2030"]
        );
    }

    #[test]
    fn test_visible_dates_unrestricted_uses_grouping_order() {
        let group = jaws();
        let selection = Selection::new().with_theaters(["Siskel"]);
        let evaluator = FilterEvaluator::new(&selection);

        assert_eq!(
            dates(&evaluator.visible_dates(&group)),
            vec!["1/1/2030", "1/2/2030", "1/3/2030"]
        );
    }

    #[test]
    fn test_visible_theaters() {
        let group = jaws();

        let all = Selection::new();
        let theaters: Vec<&str> = FilterEvaluator::new(&all)
            .visible_theaters(&group, "1/1/2030")
            .iter()
            .map(|t| t.theater.as_str())
            .collect();
        assert_eq!(theaters, vec!["Music Box", "Davis"]);

        let davis = Selection::new().with_theaters(["Davis"]);
        let evaluator = FilterEvaluator::new(&davis);
        let theaters = evaluator.visible_theaters(&group, "1/1/2030");
        assert_eq!(theaters.len(), 1);
        assert_eq!(theaters[0].times, vec!["8:00 PM", "10:00 PM"]);

        assert!(evaluator.visible_theaters(&group, "1/2/2030").is_empty());
        assert!(evaluator.visible_theaters(&group, "9/9/2030").is_empty());
    }

    #[test]
    fn test_visible_theaters_ignore_date_selection() {
        let group = jaws();
        let selection = Selection::new()
            .with_theaters(["Music Box"])
            .with_dates(["1/3/2030"]);
        let evaluator = FilterEvaluator::new(&selection);

        let theaters = evaluator.visible_theaters(&group, "1/2/2030");
        assert_eq!(theaters.len(), 1);
        assert_eq!(theaters[0].theater, "Music Box");
        assert!(!evaluator.admits("1/2/2030", "Music Box"));
    }

    #[test]
    fn test_visible_counts_matches_single() {
        let groups = vec![jaws(), jaws()];
        let selection = Selection::new().with_dates(["1/2/2030"]);
        let evaluator = FilterEvaluator::new(&selection);

        assert_eq!(evaluator.visible_counts(&groups), vec![1, 1]);
    }
}
