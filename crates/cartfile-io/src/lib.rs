//! # cartfile-io: Capability Implementations
//!
//! Production implementations of the capability traits that
//! `cartfile-core` keeps abstract:
//!
//! - [`FsFileSource`] - reads cart files through `std::fs`
//! - [`UuidIdSource`] - mints UUID v4 item ids
//! - [`TracingDiagnostics`] - logs validation reports through `tracing`
//!
//! The core pipeline never touches the file system, the id generator, or
//! the logger directly; everything effectful lives here and is injected.
//!
//! ## Usage
//! ```rust,no_run
//! let parser = cartfile_io::cart_parser();
//! let result = parser.parse("cart.csv");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod diagnostics;
pub mod fs;
pub mod ids;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use diagnostics::TracingDiagnostics;
pub use fs::FsFileSource;
pub use ids::UuidIdSource;

use cartfile_core::CartFileParser;

/// Wires a parser with the production collaborators: file system reads,
/// UUID v4 ids, and tracing diagnostics.
pub fn cart_parser() -> CartFileParser<FsFileSource, UuidIdSource, TracingDiagnostics> {
    CartFileParser::new(FsFileSource::new(), UuidIdSource::new())
        .with_diagnostics(TracingDiagnostics::new())
}
