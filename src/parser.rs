//! # Label Parser
//!
//! Turns `start,end,note` CSV text into [`LabelInterval`]s.
//!
//! ## Format
//! ```text
//! start,end,note
//! 0.0,1.5,Sa1
//! 1.5,3.0,Rest
//! ```
//!
//! - The header is required and its first three columns must be exactly
//!   `start`, `end`, `note` after trimming. Extra header columns are ignored.
//! - Every field is trimmed. There is no quoting.
//! - A data row with the wrong number of fields, or a start/end that is not a
//!   finite number, is skipped and reported. Parsing carries on.
//! - Rows are kept in file order. `start < end` and time ordering are not
//!   checked here.

use serde::Serialize;

use crate::error::SwaraError;
use crate::labels::{LabelInterval, HEADER};

/// Why a data row was left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SkipReason {
    /// Row did not have exactly three fields.
    FieldCount { found: usize },
    /// Start or end was not a finite number.
    InvalidTime,
}

/// A data row that was skipped, with its 1-indexed line number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    pub line: usize,
    pub content: String,
    pub reason: SkipReason,
}

/// Result of a successful parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLabels {
    pub intervals: Vec<LabelInterval>,
    pub skipped: Vec<SkippedRow>,
}

/// Parse label file text.
///
/// # Errors
/// Returns [`SwaraError::FormatError`] when the header is missing or wrong.
/// No intervals are returned in that case.
///
/// # Example
/// ```
/// use swara::parse_labels;
///
/// let parsed = parse_labels("start,end,note\n0.0,1.5,Sa1\nx,2.0,Pa1\n1.5,3.0,Rest\n")?;
/// assert_eq!(parsed.intervals.len(), 2);
/// assert_eq!(parsed.skipped[0].line, 3);
/// # Ok::<(), swara::SwaraError>(())
/// ```
pub fn parse_labels(text: &str) -> Result<ParsedLabels, SwaraError> {
    let mut lines = text.trim().lines();

    let header_line = lines.next().unwrap_or("");
    check_header(header_line)?;

    let mut parsed = ParsedLabels::default();
    for (i, line) in lines.enumerate() {
        let line_number = i + 2;
        match parse_row(line) {
            Ok(interval) => parsed.intervals.push(interval),
            Err(reason) => {
                log::warn!(
                    "Skipping invalid label entry at line {}: {} ({:?})",
                    line_number,
                    line,
                    reason
                );
                parsed.skipped.push(SkippedRow {
                    line: line_number,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }

    log::debug!(
        "Parsed {} label intervals, skipped {} rows",
        parsed.intervals.len(),
        parsed.skipped.len()
    );
    Ok(parsed)
}

fn check_header(line: &str) -> Result<(), SwaraError> {
    let columns: Vec<&str> = line.split(',').map(str::trim).collect();

    if columns.len() < HEADER.len() || columns[..HEADER.len()] != HEADER {
        return Err(SwaraError::FormatError {
            line: 1,
            message: format!(
                "expected headers '{}', found '{}'",
                HEADER.join(", "),
                line.trim()
            ),
        });
    }
    Ok(())
}

fn parse_row(line: &str) -> Result<LabelInterval, SkipReason> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(SkipReason::FieldCount { found: fields.len() });
    }

    let start = parse_time(fields[0]).ok_or(SkipReason::InvalidTime)?;
    let end = parse_time(fields[1]).ok_or(SkipReason::InvalidTime)?;
    Ok(LabelInterval::new(start, end, fields[2]))
}

fn parse_time(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|t| t.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_rows() {
        let parsed = parse_labels("start,end,note\n0.0,1.5,Sa1\n1.5,3.0,Rest\n").unwrap();
        assert_eq!(
            parsed.intervals,
            vec![
                LabelInterval::new(0.0, 1.5, "Sa1"),
                LabelInterval::new(1.5, 3.0, "Rest"),
            ]
        );
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_malformed_header_is_fatal() {
        let result = parse_labels("a,b,c\n0.0,1.5,Sa1\n");
        assert!(matches!(result, Err(SwaraError::FormatError { line: 1, .. })));
    }

    #[test]
    fn test_header_is_case_and_order_sensitive() {
        assert!(parse_labels("Start,End,Note\n0,1,Sa1").is_err());
        assert!(parse_labels("end,start,note\n0,1,Sa1").is_err());
        assert!(parse_labels("start,end\n0,1").is_err());
    }

    #[test]
    fn test_empty_input_is_fatal() {
        assert!(parse_labels("").is_err());
        assert!(parse_labels("   \n  ").is_err());
    }

    #[test]
    fn test_header_whitespace_and_extra_columns() {
        let parsed = parse_labels(" start , end ,note,confidence\n0,1,Sa1\n").unwrap();
        assert_eq!(parsed.intervals.len(), 1);
    }

    #[test]
    fn test_non_numeric_start_is_skipped() {
        let parsed = parse_labels("start,end,note\n0,1,Sa1\nx,2.0,Sa1\n2,3,Pa1\n").unwrap();
        assert_eq!(parsed.intervals.len(), 2);
        assert_eq!(parsed.intervals[1].text, "Pa1");
        assert_eq!(
            parsed.skipped,
            vec![SkippedRow {
                line: 3,
                content: "x,2.0,Sa1".to_string(),
                reason: SkipReason::InvalidTime,
            }]
        );
    }

    #[test]
    fn test_wrong_field_count_is_skipped() {
        let parsed = parse_labels("start,end,note\n0,1\n0,1,Sa1,extra\n\n1,2,Ri(1)1\n").unwrap();
        assert_eq!(parsed.intervals, vec![LabelInterval::new(1.0, 2.0, "Ri(1)1")]);
        let reasons: Vec<SkipReason> = parsed.skipped.iter().map(|s| s.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::FieldCount { found: 2 },
                SkipReason::FieldCount { found: 4 },
                SkipReason::FieldCount { found: 1 },
            ]
        );
    }

    #[test]
    fn test_header_only_file_is_empty_transcript() {
        let parsed = parse_labels("start,end,note\n").unwrap();
        assert!(parsed.intervals.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_blank_line_between_rows_is_skipped() {
        let parsed = parse_labels("start,end,note\n0,1,Sa1\n\n1,2,Pa1\n").unwrap();
        assert_eq!(
            parsed.intervals,
            vec![LabelInterval::new(0.0, 1.0, "Sa1"), LabelInterval::new(1.0, 2.0, "Pa1")]
        );
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 3);
        assert_eq!(parsed.skipped[0].reason, SkipReason::FieldCount { found: 1 });
    }

    #[test]
    fn test_non_finite_times_are_skipped() {
        let parsed = parse_labels("start,end,note\ninf,1,Sa1\n0,NaN,Sa1\n").unwrap();
        assert!(parsed.intervals.is_empty());
        assert_eq!(parsed.skipped.len(), 2);
    }

    #[test]
    fn test_fields_are_trimmed_and_crlf_tolerated() {
        let parsed = parse_labels("start,end,note\r\n 0.5 , 1.0 , Ga(2)3 \r\n").unwrap();
        assert_eq!(parsed.intervals, vec![LabelInterval::new(0.5, 1.0, "Ga(2)3")]);
    }

    #[test]
    fn test_order_and_inverted_rows_are_kept() {
        let parsed = parse_labels("start,end,note\n2,3,Pa1\n0,1,Sa1\n5,4,Ni(1)2\n").unwrap();
        let texts: Vec<&str> = parsed.intervals.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Pa1", "Sa1", "Ni(1)2"]);
    }
}
