//! Shared test utilities and fixtures for zip code table tests

use crate::app::models::{Coordinate, ZipCodeRecord};
use crate::app::services::zip_table::ZipCodeTable;
use std::fs;
use std::path::{Path, PathBuf};


/// Write a zip code table file with the given lines
pub fn write_table_file(dir: &Path, filename: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

/// Create a table preloaded with a few well-known test records
pub fn create_test_table() -> ZipCodeTable {
    let mut table = ZipCodeTable::new();
    table.load([
        ZipCodeRecord::new(94040, Coordinate::new(37.3861, -122.0839)),
        ZipCodeRecord::new(10001, Coordinate::new(40.7506, -73.9972)),
        ZipCodeRecord::new(60601, Coordinate::new(41.8858, -87.6229)),
    ]);
    table
}
