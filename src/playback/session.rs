//! Playback session state
//!
//! One loaded clip and one loaded transcript at a time. Loads replace the
//! whole session; ticks only move the active index.

use serde::Serialize;

use crate::labels::LabelInterval;

use super::index::{find_with, is_sorted_disjoint, Lookup};

/// Clip duration, transcript, and the currently active interval.
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    duration: f64,
    intervals: Vec<LabelInterval>,
    active: Option<usize>,
    lookup: Lookup,
}

impl PlaybackSession {
    /// Fresh session for a newly loaded or recorded clip.
    pub fn with_audio(duration: f64) -> Self {
        Self {
            duration: if duration.is_finite() && duration > 0.0 { duration } else { 0.0 },
            ..Self::default()
        }
    }

    /// Replace the transcript. The active index is cleared.
    ///
    /// `preferred` is honoured only when the intervals satisfy its
    /// precondition; binary lookup on unsorted data falls back to linear.
    pub fn load_intervals(&mut self, intervals: Vec<LabelInterval>, preferred: Lookup) {
        self.lookup = match preferred {
            Lookup::Binary if !is_sorted_disjoint(&intervals) => {
                log::warn!(
                    "Label intervals overlap, are out of order or inverted; using linear lookup"
                );
                Lookup::Linear
            }
            other => other,
        };
        self.intervals = intervals;
        self.active = None;
    }

    /// Recompute the active interval for `time` and store it.
    pub fn sync(&mut self, time: f64) -> Option<usize> {
        self.active = find_with(self.lookup, time, &self.intervals);
        self.active
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn intervals(&self) -> &[LabelInterval] {
        &self.intervals
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn lookup(&self) -> Lookup {
        self.lookup
    }
}

/// Part of the clip to play, in seconds.
///
/// `end` is `None` until the user sets a range; with no end the clip plays
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackRange {
    pub start: f64,
    pub end: Option<f64>,
}

impl PlaybackRange {
    /// Clamp user-entered bounds to the clip.
    ///
    /// A missing, non-numeric or negative start becomes 0. A missing,
    /// non-numeric or past-the-end end becomes `duration`. Without a known
    /// duration (0) an invalid end leaves the range open.
    ///
    /// # Example
    /// ```
    /// use swara::PlaybackRange;
    ///
    /// let range = PlaybackRange::normalize(Some(-3.0), Some(99.0), 12.5);
    /// assert_eq!(range.start, 0.0);
    /// assert_eq!(range.end, Some(12.5));
    /// ```
    pub fn normalize(start: Option<f64>, end: Option<f64>, duration: f64) -> Self {
        let start = match start {
            Some(s) if s.is_finite() && s >= 0.0 => s,
            _ => 0.0,
        };
        let known = duration > 0.0;
        let end = match end {
            Some(e) if e.is_finite() && (!known || e <= duration) => Some(e),
            _ if known => Some(duration),
            _ => None,
        };
        Self { start, end }
    }

    /// Whether playback at `time` has reached the end boundary.
    ///
    /// The boundary never extends past a known clip duration.
    pub fn reached_end(&self, time: f64, duration: f64) -> bool {
        match self.end {
            Some(end) => {
                let limit = if duration > 0.0 { end.min(duration) } else { end };
                time >= limit
            }
            None => false,
        }
    }
}
