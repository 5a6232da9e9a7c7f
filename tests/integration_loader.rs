//! Integration tests for the zip code table loader
//!
//! These tests exercise the full load-parse-lookup path against real files on
//! disk, including lenient handling of dirty input, reload behavior, and open
//! failures.

use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use zipcode_gazetteer::{Coordinate, LoaderConfig, ZipCodeTable};

const TOLERANCE: f64 = 1e-6;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Load a realistic table containing clean, dirty, short, and blank lines,
/// then verify lookups and the reported statistics end to end.
#[test]
fn test_load_parse_lookup_end_to_end() -> Result<()> {
    init_tracing();

    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("zipcodes.csv");
    fs::write(
        &path,
        concat!(
            "94040,Mountain View,37.3861,-122.0839,CA\n",
            "10001,New York,40.7506,-73.9972,NY\n",
            "\n",
            "10002,City,abc,-73.9860,NY\n",
            "60601\n",
            "00000,Unknown,0,0,XX\n",
        ),
    )?;

    let mut table = ZipCodeTable::new();
    let outcome = table.load_zip_codes(&path);

    assert!(outcome.success, "load failed: {}", outcome.message);
    assert!(outcome.message.contains("Loaded 5 zip codes"));
    assert_eq!(outcome.stats.lines_read, 6);
    assert_eq!(outcome.stats.records_loaded, 5);
    assert_eq!(outcome.stats.short_lines, 1);
    assert_eq!(outcome.stats.malformed_fields, 1);

    // Clean records round-trip within floating-point tolerance
    let mountain_view = table.lookup(94040);
    assert!((mountain_view.latitude - 37.3861).abs() < TOLERANCE);
    assert!((mountain_view.longitude - (-122.0839)).abs() < TOLERANCE);

    // Dirty latitude zero-filled, longitude preserved
    let dirty = table.lookup(10002);
    assert_eq!(dirty.latitude, 0.0);
    assert!((dirty.longitude - (-73.9860)).abs() < TOLERANCE);

    // Short line zero-filled to the sentinel coordinate
    assert_eq!(table.lookup(60601), Coordinate::new(0.0, 0.0));

    // Stored zero record is ambiguous with a missing key; get() is not
    assert_eq!(table.lookup(0), table.lookup(99999));
    assert!(table.get(0).is_some());
    assert!(table.get(99999).is_none());

    Ok(())
}

/// Reloading a second file appends into the table; only clear() resets it.
#[test]
fn test_reload_and_release() -> Result<()> {
    init_tracing();

    let temp_dir = TempDir::new()?;
    let first = temp_dir.path().join("west.csv");
    let second = temp_dir.path().join("east.csv");
    fs::write(&first, "94040,Mountain View,37.3861,-122.0839,CA\n")?;
    fs::write(&second, "10001,New York,40.7506,-73.9972,NY\n")?;

    let mut table = ZipCodeTable::new();
    assert!(table.load_zip_codes(&first).success);
    assert!(table.load_zip_codes(&second).success);

    assert_eq!(table.len(), 2);
    assert!(table.contains_zip(94040));
    assert!(table.contains_zip(10001));

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.lookup(94040), Coordinate::SENTINEL);

    Ok(())
}

/// An unopenable path reports failure through the outcome and leaves the
/// table untouched.
#[test]
fn test_open_failure_reports_diagnostic() {
    init_tracing();

    let mut table = ZipCodeTable::new();
    let outcome = table.load_zip_codes("/nonexistent/dir/zipcodes.csv");

    assert!(!outcome.success);
    assert!(outcome.message.contains("/nonexistent/dir/zipcodes.csv"));
    assert!(table.is_empty());

    // A failed load does not poison later loads
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("zipcodes.csv");
    fs::write(&path, "94040,Mountain View,37.3861,-122.0839,CA\n").unwrap();

    assert!(table.load_zip_codes(&path).success);
    assert_eq!(table.len(), 1);
}

/// A semicolon-delimited table loads through the configured format.
#[test]
fn test_custom_format_configuration() -> Result<()> {
    init_tracing();

    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("zipcodes.txt");
    fs::write(&path, "94040;Mountain View;37.3861;-122.0839;CA\n")?;

    let config = LoaderConfig {
        delimiter: ';',
        ..Default::default()
    };

    let mut table = ZipCodeTable::new();
    let outcome = table.load_zip_codes_with_config(&path, &config);

    assert!(outcome.success, "load failed: {}", outcome.message);
    assert!((table.lookup(94040).latitude - 37.3861).abs() < TOLERANCE);

    Ok(())
}
