//! # Error Types
//!
//! Positional validation findings and parse failures.
//!
//! ## Two Kinds of "Error"
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                    │
//! │                                                                         │
//! │  ValidationError  - A finding about the FILE. Data, not control flow.  │
//! │                     `validate` returns a list of these and never       │
//! │                     fails itself.                                      │
//! │                                                                         │
//! │  ParseError       - A failure of the PARSE CALL. Either the file       │
//! │                     could not be read, or validation found problems    │
//! │                     and the call aborts opaquely.                      │
//! │                                                                         │
//! │  Flow: contents → validate → [ValidationError] → DiagnosticSink        │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                     ParseError::ValidationFailed (detail NOT attached) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positional Convention
//! - `row` 0 is the header row; body rows are numbered 1..N in the order
//!   that remains after empty lines are dropped.
//! - `column` is the 0-based column index, or `None` for row-level findings
//!   such as a wrong cell count.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// The taxonomy of validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Wrong column name at a given header position.
    Header,
    /// Wrong cell count in a body row.
    Row,
    /// Wrong type or value in a specific cell.
    Cell,
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single finding produced by the validator.
///
/// Construct these through the helpers below; they render the exact
/// human-readable messages the rest of the system (and its tests) rely on.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Which class of finding this is.
    pub kind: ErrorKind,

    /// 0 for the header row, 1-based for body rows.
    pub row: usize,

    /// 0-based column index, or `None` for row-level findings.
    pub column: Option<usize>,

    /// Human-readable description of the finding.
    pub message: String,
}

impl ValidationError {
    /// A header token that does not match the expected column name.
    ///
    /// The expected name is quoted in the message; the received token is
    /// substituted raw.
    pub fn header(column: usize, expected: &str, received: &str) -> Self {
        ValidationError {
            kind: ErrorKind::Header,
            row: 0,
            column: Some(column),
            message: format!(
                "Expected header to be named \"{}\" but received {}.",
                expected, received
            ),
        }
    }

    /// A body row with fewer cells than the schema has columns.
    pub fn short_row(row: usize, expected: usize, received: usize) -> Self {
        ValidationError {
            kind: ErrorKind::Row,
            row,
            column: None,
            message: format!(
                "Expected row to have {} cells but received {}.",
                expected, received
            ),
        }
    }

    /// A text cell that is empty after trimming.
    pub fn empty_string(row: usize, column: usize, cell: &str) -> Self {
        ValidationError {
            kind: ErrorKind::Cell,
            row,
            column: Some(column),
            message: format!(
                "Expected cell to be a nonempty string but received \"{}\".",
                cell
            ),
        }
    }

    /// A number cell that is non-numeric or negative.
    pub fn bad_number(row: usize, column: usize, cell: &str) -> Self {
        ValidationError {
            kind: ErrorKind::Cell,
            row,
            column: Some(column),
            message: format!(
                "Expected cell to be a positive number but received \"{}\".",
                cell
            ),
        }
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// Failures of the top-level `parse` call.
///
/// ## Opaque Validation Failure
/// When validation finds problems, `parse` reports the full list to the
/// diagnostic sink and then fails with only a count. Callers that need the
/// structured findings call `validate` on the contents directly.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The cart file could not be read.
    #[error("Failed to read cart file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Validation found one or more problems with the file contents.
    /// The findings themselves went to the diagnostic sink, not here.
    #[error("Cart file failed validation ({count} errors)")]
    ValidationFailed { count: usize },
}

/// Result type for parse operations.
pub type CartResult<T> = Result<T, ParseError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_error_message() {
        let err = ValidationError::header(0, "Product name", "Produce name");
        assert_eq!(err.kind, ErrorKind::Header);
        assert_eq!(err.row, 0);
        assert_eq!(err.column, Some(0));
        assert_eq!(
            err.message,
            "Expected header to be named \"Product name\" but received Produce name."
        );
    }

    #[test]
    fn test_short_row_error_message() {
        let err = ValidationError::short_row(2, 3, 1);
        assert_eq!(err.kind, ErrorKind::Row);
        assert_eq!(err.row, 2);
        assert_eq!(err.column, None);
        assert_eq!(err.message, "Expected row to have 3 cells but received 1.");
    }

    #[test]
    fn test_cell_error_messages() {
        let err = ValidationError::empty_string(1, 0, "");
        assert_eq!(
            err.message,
            "Expected cell to be a nonempty string but received \"\"."
        );

        let err = ValidationError::bad_number(1, 2, "-10");
        assert_eq!(
            err.message,
            "Expected cell to be a positive number but received \"-10\"."
        );
    }

    #[test]
    fn test_display_is_the_message() {
        let err = ValidationError::bad_number(4, 1, "ten");
        assert_eq!(
            err.to_string(),
            "Expected cell to be a positive number but received \"ten\"."
        );
    }

    #[test]
    fn test_validation_error_json_round_trip() {
        let err = ValidationError::short_row(3, 3, 2);
        let json = serde_json::to_string(&err).unwrap();
        let back: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::ValidationFailed { count: 3 };
        assert_eq!(err.to_string(), "Cart file failed validation (3 errors)");

        let err = ParseError::Io {
            path: PathBuf::from("/tmp/cart.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("Failed to read cart file /tmp/cart.csv"));
    }
}
