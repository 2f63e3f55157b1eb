//! # Parser Module
//!
//! The top-level cart file pipeline and the capability traits it consumes.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CartFileParser::parse                              │
//! │                                                                         │
//! │  path ──► FileSource::read_to_string ──► raw contents                   │
//! │                 │ (Err → ParseError::Io)                                │
//! │                 ▼                                                       │
//! │           validate(schema, contents)                                    │
//! │                 │                                                       │
//! │      ┌──────────┴──────────┐                                            │
//! │      │ findings            │ no findings                                │
//! │      ▼                     ▼                                            │
//! │  DiagnosticSink       non-empty lines, minus header                     │
//! │      │                     │                                            │
//! │      ▼                     ▼ per line                                   │
//! │  ParseError::         parse_line ──► CartItem (id from IdSource)       │
//! │  ValidationFailed          │                                            │
//! │  (count only)              ▼                                            │
//! │                       ParseResult::from_items (total, rounded)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Injected Capabilities
//! Reading bytes, minting ids, and reporting findings are external
//! collaborators. The parser owns one of each, so the pipeline itself stays
//! pure and every test can substitute in-memory stand-ins.
//!
//! ## Usage
//! ```rust,ignore
//! use cartfile_core::CartFileParser;
//! use cartfile_io::{FsFileSource, TracingDiagnostics, UuidIdSource};
//!
//! let parser = CartFileParser::new(FsFileSource::new(), UuidIdSource::new())
//!     .with_diagnostics(TracingDiagnostics::new());
//! let result = parser.parse("cart.csv")?;
//! println!("{} items, total {}", result.item_count(), result.total);
//! ```

use std::io;
use std::path::Path;

use crate::error::{CartResult, ParseError, ValidationError};
use crate::schema::{CellValue, Schema};
use crate::types::{CartItem, ParseResult};
use crate::validation;

// =============================================================================
// Capability Traits
// =============================================================================

/// Reads file contents on behalf of the parser.
///
/// The production implementation wraps `std::fs`; tests return strings from
/// memory. Errors use `std::io::Error` so implementations do not need an
/// error type of their own.
pub trait FileSource {
    /// Reads the entire file at `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Produces a fresh unique identifier per call.
///
/// No format is required beyond uniqueness; tests may return a fixed value.
pub trait IdSource {
    /// Returns the next identifier.
    fn next_id(&self) -> String;
}

/// Receives the full validation report when `parse` aborts.
///
/// This is the only place the structured findings go; the returned error
/// deliberately carries just a count. Reporting is best-effort and must not
/// fail.
pub trait DiagnosticSink {
    /// Accepts the findings for an invalid file.
    fn report(&self, errors: &[ValidationError]);
}

/// The default sink: discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DiagnosticSink for NoopDiagnostics {
    fn report(&self, _errors: &[ValidationError]) {}
}

// =============================================================================
// Cart File Parser
// =============================================================================

/// Parses CSV cart files against the fixed cart schema.
///
/// Holds the schema plus the three injected collaborators. Each `parse`
/// call is independent; the parser keeps no state between calls.
#[derive(Debug, Clone)]
pub struct CartFileParser<R, I, D = NoopDiagnostics> {
    schema: Schema,
    reader: R,
    ids: I,
    diagnostics: D,
}

impl<R, I> CartFileParser<R, I>
where
    R: FileSource,
    I: IdSource,
{
    /// Creates a parser over the fixed cart schema.
    ///
    /// Diagnostics default to [`NoopDiagnostics`]; attach a real sink with
    /// [`with_diagnostics`](CartFileParser::with_diagnostics).
    pub fn new(reader: R, ids: I) -> Self {
        CartFileParser {
            schema: Schema::cart(),
            reader,
            ids,
            diagnostics: NoopDiagnostics,
        }
    }
}

impl<R, I, D> CartFileParser<R, I, D>
where
    R: FileSource,
    I: IdSource,
    D: DiagnosticSink,
{
    /// Replaces the diagnostic sink.
    pub fn with_diagnostics<S>(self, diagnostics: S) -> CartFileParser<R, I, S>
    where
        S: DiagnosticSink,
    {
        CartFileParser {
            schema: self.schema,
            reader: self.reader,
            ids: self.ids,
            diagnostics,
        }
    }

    /// Returns the schema this parser validates against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validates raw contents without parsing them.
    ///
    /// This is the detail channel: `parse` fails opaquely, so callers that
    /// need per-cell findings read the file and call this directly.
    pub fn validate(&self, contents: &str) -> Vec<ValidationError> {
        validation::validate(&self.schema, contents)
    }

    /// Converts one validated CSV line into a cart item.
    ///
    /// ## Precondition
    /// The line has already passed validation: exactly the schema's cell
    /// count, correctly typed. This function does not re-validate. Fed an
    /// invalid line it degrades instead of panicking: missing cells read as
    /// empty, unparseable numbers become NaN.
    pub fn parse_line(&self, line: &str) -> CartItem {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();

        let mut item = CartItem {
            id: self.ids.next_id(),
            name: String::new(),
            price: 0.0,
            quantity: 0.0,
        };

        for (index, column) in self.schema.columns().iter().enumerate() {
            let cell = cells.get(index).copied().unwrap_or("");
            match (column.key(), column.column_type().convert(cell)) {
                ("name", CellValue::Text(value)) => item.name = value,
                ("price", CellValue::Number(value)) => item.price = value,
                ("quantity", CellValue::Number(value)) => item.quantity = value,
                // Keys outside the cart item shape are skipped
                _ => {}
            }
        }

        item
    }

    /// Reads, validates, and parses the cart file at `path`.
    ///
    /// ## Returns
    /// - `Ok(ParseResult)` with items in file row order and the rounded
    ///   total, only when validation found nothing.
    /// - `Err(ParseError::Io)` when the file cannot be read.
    /// - `Err(ParseError::ValidationFailed)` after handing the full finding
    ///   list to the diagnostic sink. The error itself carries only a count.
    pub fn parse(&self, path: impl AsRef<Path>) -> CartResult<ParseResult> {
        let path = path.as_ref();
        let contents = self
            .reader
            .read_to_string(path)
            .map_err(|source| ParseError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let errors = self.validate(&contents);
        if !errors.is_empty() {
            self.diagnostics.report(&errors);
            return Err(ParseError::ValidationFailed {
                count: errors.len(),
            });
        }

        let items: Vec<CartItem> = contents
            .split('\n')
            .filter(|line| !line.is_empty())
            .skip(1) // header row
            .map(|line| self.parse_line(line))
            .collect();

        Ok(ParseResult::from_items(items))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
