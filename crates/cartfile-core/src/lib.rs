//! # cartfile-core: Pure Cart File Parsing Pipeline
//!
//! This crate is the **heart** of Cartfile. It turns a CSV-formatted
//! shopping cart file into structured line items with a computed total,
//! after validating the text against a fixed three-column schema.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cartfile Pipeline                                │
//! │                                                                         │
//! │   raw text ──► Validator ──► row split ──► Line Parser ──► Aggregator  │
//! │                   │                            │                        │
//! │              fail fast on                 id from injected              │
//! │              any finding                  IdSource                      │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐           │
//! │   │  schema   │  │validation │  │  parser   │  │   types   │           │
//! │   │  Column   │  │  header   │  │ CartFile  │  │ CartItem  │           │
//! │   │  table    │  │ row/cell  │  │  Parser   │  │ ParseRes. │           │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘           │
//! │                                                                         │
//! │   NO I/O • NO ID GENERATION • NO LOGGING • PURE FUNCTIONS              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - The declarative column table (name, key, cell type)
//! - [`validation`] - Schema-driven validation with positional findings
//! - [`parser`] - Capability traits and the top-level [`CartFileParser`]
//! - [`types`] - [`CartItem`], [`ParseResult`], and total aggregation
//! - [`error`] - Finding records and parse failures
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same input, same output; nothing here suspends,
//!    retries, or keeps state between calls
//! 2. **No I/O**: File reads, id generation, and diagnostics arrive through
//!    the capability traits in [`parser`]
//! 3. **Schema as Data**: Validation and parsing both walk the same runtime
//!    column table, so they cannot drift apart
//! 4. **Explicit Errors**: Findings are typed records with row/column
//!    positions; `parse` failures are a typed enum, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use cartfile_core::schema::Schema;
//! use cartfile_core::validation::validate;
//!
//! let schema = Schema::cart();
//!
//! // A wrong quantity is pinpointed to its exact row and column
//! let errors = validate(&schema, "Product name,Price,Quantity\nMollis consequat,2,-10\n");
//! assert_eq!(errors.len(), 1);
//! assert_eq!((errors[0].row, errors[0].column), (1, Some(2)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod parser;
pub mod schema;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cartfile_core::CartItem` instead of
// `use cartfile_core::types::CartItem`

pub use error::{CartResult, ErrorKind, ParseError, ValidationError};
pub use parser::{CartFileParser, DiagnosticSink, FileSource, IdSource, NoopDiagnostics};
pub use schema::{CellValue, Column, ColumnType, Schema};
pub use types::{calc_total, round_to_cents, CartItem, ParseResult};
