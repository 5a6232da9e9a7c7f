//! Data models for the zip code gazetteer
//!
//! This module contains the core data structures representing geographic
//! coordinates and the parsed zip code records built from table files.

use serde::{Deserialize, Serialize};

// =============================================================================
// Coordinate Structure
// =============================================================================

/// A geographic coordinate pair in decimal degrees
///
/// No range validation is applied: the table source is trusted as-is, and the
/// all-zero value doubles as the sentinel for "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// The sentinel value returned for absent keys
    ///
    /// Indistinguishable from a legitimately stored (0,0) entry. Callers that
    /// need the distinction use the table's `get` accessor instead of `lookup`.
    pub const SENTINEL: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// Create a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check whether this coordinate equals the sentinel value
    pub fn is_sentinel(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::SENTINEL
    }
}

// =============================================================================
// Zip Code Record Structure
// =============================================================================

/// One parsed record from a zip code table file
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ZipCodeRecord {
    /// Zip code key, non-negative in practice
    pub zip_code: i32,

    /// Coordinate parsed from the latitude and longitude fields
    pub coordinate: Coordinate,
}

impl ZipCodeRecord {
    /// Create a new record
    pub fn new(zip_code: i32, coordinate: Coordinate) -> Self {
        Self {
            zip_code,
            coordinate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_default() {
        assert_eq!(Coordinate::default(), Coordinate::SENTINEL);
        assert!(Coordinate::SENTINEL.is_sentinel());
    }

    #[test]
    fn test_is_sentinel_requires_both_axes_zero() {
        assert!(Coordinate::new(0.0, 0.0).is_sentinel());
        assert!(!Coordinate::new(0.0, -122.0839).is_sentinel());
        assert!(!Coordinate::new(37.3861, 0.0).is_sentinel());
    }

    #[test]
    fn test_record_construction() {
        let record = ZipCodeRecord::new(94040, Coordinate::new(37.3861, -122.0839));
        assert_eq!(record.zip_code, 94040);
        assert_eq!(record.coordinate.latitude, 37.3861);
        assert_eq!(record.coordinate.longitude, -122.0839);
    }
}
