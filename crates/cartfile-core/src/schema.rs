//! # Schema Module
//!
//! The declarative column table that drives validation and parsing.
//!
//! ## Schema as Data
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart File Schema                                 │
//! │                                                                         │
//! │  index │ header label    │ item key   │ cell type                       │
//! │  ──────┼─────────────────┼────────────┼─────────────────                │
//! │    0   │ "Product name"  │ "name"     │ Text                            │
//! │    1   │ "Price"         │ "price"    │ PositiveNumber                  │
//! │    2   │ "Quantity"      │ "quantity" │ PositiveNumber                  │
//! │                                                                         │
//! │  The table is ordinary runtime data, not types. The validator and      │
//! │  line parser both walk it column by column, so adding or reordering    │
//! │  columns is a table edit, not a code change.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartfile_core::schema::{ColumnType, Schema};
//!
//! let schema = Schema::cart();
//! assert_eq!(schema.column_count(), 3);
//! assert_eq!(schema.columns()[0].name(), "Product name");
//! assert_eq!(schema.columns()[1].column_type(), ColumnType::PositiveNumber);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Column Type
// =============================================================================

/// The expected shape of a cell's contents.
///
/// Each schema column declares one of these, and both the validator and the
/// line parser dispatch on it. Keeping the dispatch in one place is what
/// keeps `validate` and `parse_line` behaviorally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Any nonempty string (after trimming).
    Text,
    /// A number that is zero or greater. Standard decimal notation only;
    /// locale-specific formats are out of scope.
    PositiveNumber,
}

impl ColumnType {
    /// Converts a trimmed cell into its typed value.
    ///
    /// ## Behavior
    /// - `Text` cells pass through as owned strings.
    /// - `PositiveNumber` cells are coerced with [`coerce_number`]; a cell
    ///   that does not coerce yields `NaN` rather than a panic. Validation
    ///   catches those cells before any caller that cares sees them.
    ///
    /// ## Example
    /// ```rust
    /// use cartfile_core::schema::{CellValue, ColumnType};
    ///
    /// assert_eq!(
    ///     ColumnType::Text.convert("Mollis consequat"),
    ///     CellValue::Text("Mollis consequat".to_string())
    /// );
    /// assert_eq!(
    ///     ColumnType::PositiveNumber.convert("9.00"),
    ///     CellValue::Number(9.0)
    /// );
    /// ```
    pub fn convert(&self, cell: &str) -> CellValue {
        match self {
            ColumnType::Text => CellValue::Text(cell.to_string()),
            ColumnType::PositiveNumber => {
                CellValue::Number(coerce_number(cell).unwrap_or(f64::NAN))
            }
        }
    }
}

// =============================================================================
// Cell Value
// =============================================================================

/// A cell after type dispatch.
///
/// The source of this design stores either a string or a number in the same
/// dynamically typed field. In Rust the item fields are statically typed, so
/// the dispatch happens here and item construction matches on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

// =============================================================================
// Column
// =============================================================================

/// One column of the cart file schema.
///
/// Read-only once constructed: the accessors below are the whole API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header label expected in the first file row.
    name: String,
    /// Field key the cell value is assigned to on the parsed item.
    key: String,
    /// Cell type rule for body rows.
    ty: ColumnType,
}

impl Column {
    /// Creates a column description.
    pub fn new(name: impl Into<String>, key: impl Into<String>, ty: ColumnType) -> Self {
        Column {
            name: name.into(),
            key: key.into(),
            ty,
        }
    }

    /// Returns the expected header label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item field key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the declared cell type.
    #[inline]
    pub fn column_type(&self) -> ColumnType {
        self.ty
    }
}

// =============================================================================
// Schema
// =============================================================================

/// The ordered column table for a cart file.
///
/// ## Invariants
/// - Constructed once, never mutated (there is no mutation API).
/// - The cart schema is fixed at exactly three columns for the lifetime of
///   any parser holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Returns the fixed shopping-cart schema:
    /// `Product name`, `Price`, `Quantity`.
    ///
    /// ## Example
    /// ```rust
    /// use cartfile_core::schema::Schema;
    ///
    /// let schema = Schema::cart();
    /// let keys: Vec<&str> = schema.columns().iter().map(|c| c.key()).collect();
    /// assert_eq!(keys, ["name", "price", "quantity"]);
    /// ```
    pub fn cart() -> Self {
        Schema {
            columns: vec![
                Column::new("Product name", "name", ColumnType::Text),
                Column::new("Price", "price", ColumnType::PositiveNumber),
                Column::new("Quantity", "quantity", ColumnType::PositiveNumber),
            ],
        }
    }

    /// Returns the columns in file order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the number of columns (the required cell count per row).
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Coerces a trimmed cell to a number.
///
/// ## Rules
/// - Standard decimal notation is accepted (`"9.00"` → 9.0, `"2"` → 2.0).
/// - Non-numeric strings (including the empty string) return `None`.
/// - A literal `NaN` token also returns `None`; it is not a number by the
///   rules of this file format.
///
/// Negative values DO coerce. Whether a negative number is acceptable is a
/// column rule, checked by the validator, not a property of coercion.
///
/// ## Example
/// ```rust
/// use cartfile_core::schema::coerce_number;
///
/// assert_eq!(coerce_number("9.00"), Some(9.0));
/// assert_eq!(coerce_number("-10"), Some(-10.0));
/// assert_eq!(coerce_number("ten"), None);
/// assert_eq!(coerce_number(""), None);
/// ```
pub fn coerce_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|value| !value.is_nan())
}

// =============================================================================
// Unit Tests
// =============================================================================
