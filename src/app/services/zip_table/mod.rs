//! Zip code table service for O(1) coordinate lookups
//!
//! This module provides the in-memory mapping from zip code to coordinate.
//! The table is populated from delimited table files by the methods in
//! [`loader`] and queried directly by the distance-calculation consumers of
//! this crate.

use crate::app::models::{Coordinate, ZipCodeRecord};
use std::collections::HashMap;

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{LoadOutcome, LoadStats};

/// In-memory zip code table providing O(1) coordinate lookups
///
/// The table owns the zip code to coordinate mapping. It grows across
/// repeated loads (duplicate keys overwrite, last write wins) and is reset
/// only by an explicit [`clear`](ZipCodeTable::clear). Exactly one load pass
/// is expected to complete before lookups begin; the table carries no
/// interior locking.
#[derive(Debug, Clone, Default)]
pub struct ZipCodeTable {
    /// Coordinates indexed by zip code
    pub(crate) entries: HashMap<i32, Coordinate>,
}

impl ZipCodeTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a single coordinate, overwriting any previous entry for the key
    pub fn insert(&mut self, zip_code: i32, coordinate: Coordinate) {
        self.entries.insert(zip_code, coordinate);
    }

    /// Bulk-insert parsed records
    ///
    /// Duplicate keys overwrite earlier entries, whether those came from this
    /// call or a previous load. Never fails; malformed records are filtered
    /// or zero-filled upstream by the loader.
    pub fn load(&mut self, records: impl IntoIterator<Item = ZipCodeRecord>) {
        for record in records {
            self.entries.insert(record.zip_code, record.coordinate);
        }
    }

    /// Look up the coordinate for a zip code (O(1))
    ///
    /// Total function: absent keys return [`Coordinate::SENTINEL`] rather
    /// than an error, so a (0,0) result is ambiguous with a stored zero
    /// coordinate. Use [`get`](ZipCodeTable::get) when the distinction
    /// matters.
    pub fn lookup(&self, zip_code: i32) -> Coordinate {
        self.entries
            .get(&zip_code)
            .copied()
            .unwrap_or(Coordinate::SENTINEL)
    }

    /// Look up a zip code, distinguishing absent keys from stored zeros
    ///
    /// Extension beyond the sentinel contract of
    /// [`lookup`](ZipCodeTable::lookup); the default lookup semantics are
    /// unchanged.
    pub fn get(&self, zip_code: i32) -> Option<&Coordinate> {
        self.entries.get(&zip_code)
    }

    /// Check if a zip code exists in the table
    pub fn contains_zip(&self, zip_code: i32) -> bool {
        self.entries.contains_key(&zip_code)
    }

    /// Get the total number of zip codes in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the table and release its retained capacity
    ///
    /// Safe to call when already empty.
    pub fn clear(&mut self) {
        self.entries = HashMap::new();
    }
}
