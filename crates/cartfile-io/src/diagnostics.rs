//! # Diagnostic Sink
//!
//! The `tracing`-backed [`DiagnosticSink`]: when `parse` aborts on an
//! invalid file, the full finding list lands in the log, one structured
//! event per finding. This is the only channel carrying the details; the
//! returned error holds just a count.

use cartfile_core::{DiagnosticSink, ValidationError};
use tracing::warn;

/// Logs validation reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    /// Creates a diagnostic sink.
    pub fn new() -> Self {
        TracingDiagnostics
    }
}

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, errors: &[ValidationError]) {
        warn!(count = errors.len(), "Cart file failed validation");
        for error in errors {
            warn!(
                kind = ?error.kind,
                row = error.row,
                column = ?error.column,
                "{}",
                error.message
            );
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
