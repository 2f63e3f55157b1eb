//! # Identifier Source
//!
//! UUID v4 item ids, the same identifier convention as every other entity
//! id in the system.

use cartfile_core::IdSource;
use uuid::Uuid;

/// Mints a fresh UUID v4 string per item.
///
/// Globally unique without coordination, so two parses of the same file
/// never collide on ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl UuidIdSource {
    /// Creates an id source.
    pub fn new() -> Self {
        UuidIdSource
    }
}

impl IdSource for UuidIdSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_valid_uuids() {
        let id = UuidIdSource::new().next_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_ids_are_distinct_per_call() {
        let ids = UuidIdSource::new();
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
