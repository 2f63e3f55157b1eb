//! # Validation Module
//!
//! Schema-driven validation of raw cart file text.
//!
//! ## Validation Passes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart File Validation                               │
//! │                                                                         │
//! │  raw contents                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  split on '\n', drop empty lines (invisible to row numbering)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 1: header   line 0 vs schema names  → Header errors at (0, i)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pass 2: rows     cell count per body row → Row error at (r, -) and    │
//! │       │           skip the row's cell checks                            │
//! │       ▼                                                                 │
//! │  Pass 3: cells    per-column type rules   → Cell errors at (r, c)      │
//! │                                                                         │
//! │  All findings accumulate in discovery order: header errors first,      │
//! │  then rows in file order, cells in column order within a row.          │
//! │  An empty list signals a valid file.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartfile_core::schema::Schema;
//! use cartfile_core::validation::validate;
//!
//! let schema = Schema::cart();
//! let errors = validate(&schema, "Product name,Price,Quantity\nMollis consequat,9.00,2\n");
//! assert!(errors.is_empty());
//! ```

use crate::error::ValidationError;
use crate::schema::{coerce_number, ColumnType, Schema};

// =============================================================================
// Entry Point
// =============================================================================

/// Validates raw file contents against a schema.
///
/// ## Contract
/// - Never fails; always returns the (possibly empty) list of findings.
/// - No side effects. Reporting findings anywhere is the caller's business.
/// - Fully empty lines are dropped before anything is numbered, so a blank
///   line between two rows does not shift the row indexes of anything and
///   is not itself an error. A line of only whitespace is NOT empty: it
///   survives the filter and fails the row-length check like any other
///   malformed row.
pub fn validate(schema: &Schema, contents: &str) -> Vec<ValidationError> {
    let lines: Vec<&str> = contents.split('\n').filter(|line| !line.is_empty()).collect();

    let mut errors = Vec::new();

    // A file without any lines has no header line; every expected column
    // then mismatches against the empty token.
    let header = lines.first().copied().unwrap_or("");
    check_header(schema, header, &mut errors);

    for (offset, line) in lines.iter().skip(1).enumerate() {
        check_row(schema, offset + 1, line, &mut errors);
    }

    errors
}

// =============================================================================
// Header Pass
// =============================================================================

/// Checks every header position against the schema's column names.
///
/// Positions are checked independently: two wrong labels produce two
/// findings in one pass. A missing token compares as the empty string.
fn check_header(schema: &Schema, line: &str, errors: &mut Vec<ValidationError>) {
    let received: Vec<&str> = line.split(',').map(str::trim).collect();

    for (index, column) in schema.columns().iter().enumerate() {
        let token = received.get(index).copied().unwrap_or("");
        if token != column.name() {
            errors.push(ValidationError::header(index, column.name(), token));
        }
    }
}

// =============================================================================
// Row and Cell Passes
// =============================================================================

/// Checks one body row: cell count first, then per-cell type rules.
///
/// A short row produces exactly one row-level finding and no cell findings;
/// there is nothing meaningful to say about cells that are not there.
/// Extra cells beyond the schema are ignored.
fn check_row(schema: &Schema, row: usize, line: &str, errors: &mut Vec<ValidationError>) {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();

    if cells.len() < schema.column_count() {
        errors.push(ValidationError::short_row(
            row,
            schema.column_count(),
            cells.len(),
        ));
        return;
    }

    for (index, column) in schema.columns().iter().enumerate() {
        let cell = cells[index];
        match column.column_type() {
            ColumnType::Text => {
                if cell.is_empty() {
                    errors.push(ValidationError::empty_string(row, index, cell));
                }
            }
            ColumnType::PositiveNumber => match coerce_number(cell) {
                Some(value) if value >= 0.0 => {}
                _ => errors.push(ValidationError::bad_number(row, index, cell)),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn check(contents: &str) -> Vec<ValidationError> {
        validate(&Schema::cart(), contents)
    }

    #[test]
    fn test_valid_file_has_no_errors() {
        let contents = "Product name,Price,Quantity\n\
                        Mollis consequat,9.00,2\n\
                        Tvoluptatem,10.32,1\n";
        assert!(check(contents).is_empty());
    }

    #[test]
    fn test_cell_whitespace_is_trimmed() {
        let contents = " Product name , Price , Quantity \n  Mollis consequat ,  9.00 , 2 \n";
        assert!(check(contents).is_empty());
    }

    #[test]
    fn test_blank_lines_are_invisible() {
        // Empty lines vanish before numbering: the bad row is row 2, not 4.
        let contents = "Product name,Price,Quantity\n\nScelerisque lanien,18.90,1\n\nbad row\n";
        let errors = check(contents);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Row);
        assert_eq!(errors[0].row, 2);
    }

    #[test]
    fn test_whitespace_only_line_is_a_short_row() {
        // "   " is not an empty string, so it is numbered and checked.
        let contents = "Product name,Price,Quantity\n   \n";
        let errors = check(contents);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Row);
        assert_eq!(errors[0].row, 1);
        assert_eq!(errors[0].column, None);
        assert_eq!(errors[0].message, "Expected row to have 3 cells but received 1.");
    }

    #[test]
    fn test_header_mismatch_reports_position_and_names() {
        let contents = "Produce name,Price,Quantity\nMollis consequat,9.00,2\n";
        let errors = check(contents);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Header);
        assert_eq!(errors[0].row, 0);
        assert_eq!(errors[0].column, Some(0));
        assert_eq!(
            errors[0].message,
            "Expected header to be named \"Product name\" but received Produce name."
        );
    }

    #[test]
    fn test_every_header_position_is_checked_independently() {
        let contents = "Name,Cost,Quantity\nMollis consequat,9.00,2\n";
        let errors = check(contents);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].column, Some(0));
        assert_eq!(errors[1].column, Some(1));
    }

    #[test]
    fn test_missing_header_tokens_compare_as_empty() {
        let errors = check("Product name\nMollis consequat,9.00,2\n");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].message,
            "Expected header to be named \"Price\" but received ."
        );
        assert_eq!(
            errors[1].message,
            "Expected header to be named \"Quantity\" but received ."
        );
    }

    #[test]
    fn test_empty_contents_reports_all_headers() {
        let errors = check("");

        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.kind == ErrorKind::Header && e.row == 0));
    }

    #[test]
    fn test_short_row_suppresses_cell_checks() {
        // The row also has an empty name and a non-numeric price, but a
        // short row reports only the row-level finding.
        let contents = "Product name,Price,Quantity\n,ten\n";
        let errors = check(contents);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Row);
        assert_eq!(errors[0].message, "Expected row to have 3 cells but received 2.");
    }

    #[test]
    fn test_extra_cells_are_not_an_error() {
        let contents = "Product name,Price,Quantity\nMollis consequat,9.00,2,spare\n";
        assert!(check(contents).is_empty());
    }

    #[test]
    fn test_empty_name_cell() {
        let contents = "Product name,Price,Quantity\n,9.00,2\n";
        let errors = check(contents);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Cell);
        assert_eq!(errors[0].row, 1);
        assert_eq!(errors[0].column, Some(0));
        assert_eq!(
            errors[0].message,
            "Expected cell to be a nonempty string but received \"\"."
        );
    }

    #[test]
    fn test_negative_quantity_cell() {
        let contents = "Product name,Price,Quantity\nMollis consequat,2,-10\n";
        let errors = check(contents);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Cell);
        assert_eq!(errors[0].row, 1);
        assert_eq!(errors[0].column, Some(2));
        assert_eq!(
            errors[0].message,
            "Expected cell to be a positive number but received \"-10\"."
        );
    }

    #[test]
    fn test_non_numeric_price_cell() {
        let contents = "Product name,Price,Quantity\nMollis consequat,ten,2\n";
        let errors = check(contents);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].column, Some(1));
        assert_eq!(
            errors[0].message,
            "Expected cell to be a positive number but received \"ten\"."
        );
    }

    #[test]
    fn test_zero_is_a_valid_number() {
        let contents = "Product name,Price,Quantity\nGratis item,0,0\n";
        assert!(check(contents).is_empty());
    }

    #[test]
    fn test_findings_accumulate_in_discovery_order() {
        let contents = "Product name,Cost,Quantity\n\
                        ,9.00,2\n\
                        short\n\
                        Mollis consequat,ten,-1\n";
        let errors = check(contents);

        let positions: Vec<(ErrorKind, usize, Option<usize>)> =
            errors.iter().map(|e| (e.kind, e.row, e.column)).collect();

        assert_eq!(
            positions,
            vec![
                (ErrorKind::Header, 0, Some(1)),
                (ErrorKind::Cell, 1, Some(0)),
                (ErrorKind::Row, 2, None),
                (ErrorKind::Cell, 3, Some(1)),
                (ErrorKind::Cell, 3, Some(2)),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings_are_tolerated() {
        // Per-cell trimming absorbs the stray '\r' on each line.
        let contents = "Product name,Price,Quantity\r\nMollis consequat,9.00,2\r\n";
        assert!(check(contents).is_empty());
    }
}
