//! # Label Intervals
//!
//! A transcript is a sequence of [`LabelInterval`]s, each covering the
//! half-open span `[start_time, end_time)` of the clip. Order is the order the
//! rows appeared in the source file; nothing here re-sorts them.
//!
//! This module also produces the CSV the annotation service hands back:
//! - [`write_labels()`] - Serialize intervals as `start,end,note` CSV
//! - [`intervals_from_notes()`] - Spread a quantized note list evenly over a clip

use serde::{Deserialize, Serialize};

use crate::error::SwaraError;

/// Required header columns, in order.
pub const HEADER: [&str; 3] = ["start", "end", "note"];

/// One transcribed swara (or `Rest`) and the time it is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelInterval {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

impl LabelInterval {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    /// Whether `time` falls in `[start_time, end_time)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

/// Write intervals in the `start,end,note` format.
///
/// The format has no quoting, so a note containing a comma or a line break
/// cannot be written.
///
/// # Example
/// ```
/// use swara::{write_labels, LabelInterval};
///
/// let csv = write_labels(&[LabelInterval::new(0.0, 1.5, "Sa1")]).unwrap();
/// assert_eq!(csv, "start,end,note\n0,1.5,Sa1\n");
/// ```
pub fn write_labels(intervals: &[LabelInterval]) -> Result<String, SwaraError> {
    let mut out = HEADER.join(",");
    out.push('\n');

    for (i, interval) in intervals.iter().enumerate() {
        if interval.text.contains([',', '\n', '\r']) {
            return Err(SwaraError::FormatError {
                line: i + 2,
                message: format!("note {:?} contains a comma or line break", interval.text),
            });
        }
        out.push_str(&format!(
            "{},{},{}\n",
            interval.start_time, interval.end_time, interval.text
        ));
    }

    Ok(out)
}

/// Give each note an equal share of `duration`, in order.
///
/// This is how the annotation service lays out its quantized notes:
/// note `i` of `n` covers `[i·d/n, (i+1)·d/n)`.
pub fn intervals_from_notes<S: AsRef<str>>(notes: &[S], duration: f64) -> Vec<LabelInterval> {
    if notes.is_empty() {
        return Vec::new();
    }
    let step = duration / notes.len() as f64;
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| LabelInterval::new(i as f64 * step, (i + 1) as f64 * step, note.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let interval = LabelInterval::new(1.0, 2.0, "Pa3");
        assert!(!interval.contains(0.999));
        assert!(interval.contains(1.0));
        assert!(interval.contains(1.999));
        assert!(!interval.contains(2.0));
    }

    #[test]
    fn test_write_labels() {
        let intervals = vec![
            LabelInterval::new(0.0, 1.25, "Sa4"),
            LabelInterval::new(1.25, 2.5, "Rest"),
        ];
        let csv = write_labels(&intervals).unwrap();
        assert_eq!(csv, "start,end,note\n0,1.25,Sa4\n1.25,2.5,Rest\n");
    }

    #[test]
    fn test_write_labels_rejects_comma_in_note() {
        let intervals = vec![
            LabelInterval::new(0.0, 1.0, "Sa1"),
            LabelInterval::new(1.0, 2.0, "Sa1, Pa1"),
        ];
        match write_labels(&intervals) {
            Err(SwaraError::FormatError { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_intervals_from_notes_divides_duration_evenly() {
        let intervals = intervals_from_notes(&["Sa4", "Rest", "Pa4", "Sa5"], 2.0);
        assert_eq!(intervals.len(), 4);
        assert_eq!(intervals[0], LabelInterval::new(0.0, 0.5, "Sa4"));
        assert_eq!(intervals[1], LabelInterval::new(0.5, 1.0, "Rest"));
        assert_eq!(intervals[3], LabelInterval::new(1.5, 2.0, "Sa5"));
    }

    #[test]
    fn test_intervals_from_notes_empty() {
        let notes: Vec<String> = Vec::new();
        assert!(intervals_from_notes(&notes, 10.0).is_empty());
    }
}
