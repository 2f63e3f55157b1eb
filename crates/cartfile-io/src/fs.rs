//! # File Source
//!
//! The `std::fs`-backed [`FileSource`] implementation.

use std::fs;
use std::io;
use std::path::Path;

use cartfile_core::FileSource;
use tracing::debug;

/// Reads cart files from the local file system.
///
/// ## Example
/// ```rust,no_run
/// use cartfile_core::{CartFileParser, FileSource};
/// use cartfile_io::{FsFileSource, UuidIdSource};
///
/// let parser = CartFileParser::new(FsFileSource::new(), UuidIdSource::new());
/// let result = parser.parse("cart.csv");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileSource;

impl FsFileSource {
    /// Creates a file source.
    pub fn new() -> Self {
        FsFileSource
    }
}

impl FileSource for FsFileSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        debug!(path = %path.display(), "Reading cart file");
        let contents = fs::read_to_string(path)?;
        debug!(bytes = contents.len(), "Cart file read");
        Ok(contents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
