//! Zip code queries beyond point lookup
//!
//! This module provides registry-style queries over the loaded table: key
//! enumeration and bounding-box searches over the stored coordinates.

use super::ZipCodeTable;
use crate::app::models::Coordinate;

impl ZipCodeTable {
    /// Get all zip codes in the table
    pub fn zip_codes(&self) -> Vec<i32> {
        self.entries.keys().copied().collect()
    }

    /// Find zip codes within a geographic bounding box
    ///
    /// # Arguments
    /// * `min_lat` - Southern boundary (minimum latitude)
    /// * `max_lat` - Northern boundary (maximum latitude)
    /// * `min_lon` - Western boundary (minimum longitude)
    /// * `max_lon` - Eastern boundary (maximum longitude)
    ///
    /// # Returns
    /// Vector of (zip code, coordinate) pairs within the bounding box
    pub fn find_zips_in_region(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Vec<(i32, Coordinate)> {
        self.entries
            .iter()
            .filter(|(_, coordinate)| {
                coordinate.latitude >= min_lat
                    && coordinate.latitude <= max_lat
                    && coordinate.longitude >= min_lon
                    && coordinate.longitude <= max_lon
            })
            .map(|(zip_code, coordinate)| (*zip_code, *coordinate))
            .collect()
    }

    /// Get the geographic bounds covering every stored coordinate
    ///
    /// Returns `None` for an empty table.
    pub fn coordinate_bounds(&self) -> Option<GeographicBounds> {
        let mut coordinates = self.entries.values();
        let first = coordinates.next()?;

        let mut bounds = GeographicBounds {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };

        for coordinate in coordinates {
            bounds.min_lat = bounds.min_lat.min(coordinate.latitude);
            bounds.max_lat = bounds.max_lat.max(coordinate.latitude);
            bounds.min_lon = bounds.min_lon.min(coordinate.longitude);
            bounds.max_lon = bounds.max_lon.max(coordinate.longitude);
        }

        Some(bounds)
    }
}

/// Geographic bounds of all coordinates in the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}
