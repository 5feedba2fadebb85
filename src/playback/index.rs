//! Active interval lookup
//!
//! Two searches with the same observable result on well-formed transcripts:
//! a linear first-match scan that works on any sequence, and a binary search
//! that requires ascending, non-overlapping intervals.

use serde::{Deserialize, Serialize};

use crate::labels::LabelInterval;

/// Search strategy for the active interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lookup {
    #[default]
    Linear,
    Binary,
}

/// Index of the first interval covering `time`, or `None` if no interval does.
///
/// Intervals are half-open: a time equal to an interval's end belongs to the
/// next interval. With overlapping intervals the earliest in sequence order
/// wins.
///
/// # Example
/// ```
/// use swara::{find_active_interval, LabelInterval};
///
/// let intervals = vec![
///     LabelInterval::new(0.0, 1.0, "A"),
///     LabelInterval::new(1.0, 2.0, "B"),
/// ];
/// assert_eq!(find_active_interval(0.999, &intervals), Some(0));
/// assert_eq!(find_active_interval(1.0, &intervals), Some(1));
/// assert_eq!(find_active_interval(5.0, &intervals), None);
/// ```
pub fn find_active_interval(time: f64, intervals: &[LabelInterval]) -> Option<usize> {
    intervals.iter().position(|interval| interval.contains(time))
}

/// Binary search variant of [`find_active_interval`].
///
/// Precondition: [`is_sorted_disjoint`] holds for `intervals`. Results are
/// unspecified otherwise.
pub fn find_active_interval_sorted(time: f64, intervals: &[LabelInterval]) -> Option<usize> {
    // first interval whose end is past `time`
    let candidate = intervals.partition_point(|interval| interval.end_time <= time);
    intervals
        .get(candidate)
        .filter(|interval| interval.contains(time))
        .map(|_| candidate)
}

/// Whether no interval is inverted and every interval starts at or after
/// the previous one ends.
///
/// Together these make end times ascending, which the binary search needs.
pub fn is_sorted_disjoint(intervals: &[LabelInterval]) -> bool {
    intervals
        .iter()
        .all(|interval| interval.start_time <= interval.end_time)
        && intervals
            .windows(2)
            .all(|pair| pair[0].end_time <= pair[1].start_time)
}

/// Run the lookup chosen for a session.
pub fn find_with(lookup: Lookup, time: f64, intervals: &[LabelInterval]) -> Option<usize> {
    match lookup {
        Lookup::Linear => find_active_interval(time, intervals),
        Lookup::Binary => find_active_interval_sorted(time, intervals),
    }
}
