//! # Error Types
//!
//! This module defines all error types for the swara engine.
//!
//! Only whole-file problems are errors. A malformed data row in a label file
//! is skipped and reported through [`crate::parser::SkippedRow`], and an
//! unknown swara passes through transposition unchanged.
//!
//! ## Error Types
//! - `FormatError` - Label file header missing or malformed, or a note that cannot be written as CSV
//! - `ConfigError` - Invalid YAML viewer configuration
//! - `TransportError` - The annotation service rejected an upload or download
//!
//! ## Usage
//! ```rust
//! use swara::{parse_labels, SwaraError};
//!
//! match parse_labels("a,b,c\n0,1,Sa1\n") {
//!     Ok(parsed) => println!("{} intervals", parsed.intervals.len()),
//!     Err(e @ SwaraError::FormatError { .. }) => eprintln!("{}", e.user_message()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwaraError {
    /// Label file format error with the offending line (1-indexed).
    ///
    /// # Example
    /// ```
    /// # use swara::SwaraError;
    /// let err = SwaraError::FormatError {
    ///     line: 1,
    ///     message: "expected header 'start,end,note'".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Format error at line 1: expected header 'start,end,note'");
    /// ```
    #[error("Format error at line {line}: {message}")]
    FormatError { line: usize, message: String },

    /// Invalid viewer configuration.
    ///
    /// # Example
    /// ```
    /// # use swara::SwaraError;
    /// let err = SwaraError::ConfigError("row-height must be positive".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: row-height must be positive");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The annotation service could not be reached or refused the request.
    #[error("Transport error: {0}")]
    TransportError(String),
}

impl SwaraError {
    /// Message suitable for an alert shown to the user.
    ///
    /// A bad label file and a failed network call get different advice.
    pub fn user_message(&self) -> String {
        match self {
            SwaraError::FormatError { line, message } => format!(
                "Wrong file format (line {}): {}. Please load a CSV file with the header 'start,end,note'.",
                line, message
            ),
            SwaraError::ConfigError(msg) => format!("Viewer configuration is invalid: {}", msg),
            SwaraError::TransportError(msg) => format!(
                "Network error while talking to the annotation service: {}. Please check your connection and try again.",
                msg
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_distinguishes_format_from_transport() {
        let format = SwaraError::FormatError {
            line: 1,
            message: "bad header".to_string(),
        }
        .user_message();
        let transport = SwaraError::TransportError("HTTP error! status: 500".to_string()).user_message();

        assert!(format.starts_with("Wrong file format"));
        assert!(transport.starts_with("Network error"));
        assert!(transport.contains("status: 500"));
    }
}
