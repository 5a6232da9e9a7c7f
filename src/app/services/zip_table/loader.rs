//! Table loading from delimited text files
//!
//! This module drives the end-to-end load: it opens the source path, splits
//! each line into fields, converts the numeric fields under the uniform
//! zero-fill policy, and inserts records into the table as they are read.

use super::ZipCodeTable;
use super::metadata::{LoadOutcome, LoadStats};
use crate::app::models::Coordinate;
use crate::app::services::field_parser::{parse_degrees, parse_zip_code, split_fields};
use crate::config::LoaderConfig;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

impl ZipCodeTable {
    /// Load zip codes from a table file using the default format
    ///
    /// Comma-delimited records, at least four fields per line:
    /// `zip,<ignored>,latitude,longitude,...`. See
    /// [`load_zip_codes_with_config`](ZipCodeTable::load_zip_codes_with_config).
    pub fn load_zip_codes(&mut self, path: impl AsRef<Path>) -> LoadOutcome {
        self.load_zip_codes_with_config(path, &LoaderConfig::default())
    }

    /// Load zip codes from a table file
    ///
    /// Opens `path` for reading and inserts one record per line as it is
    /// read, streaming rather than batching. Repeated loads append into the
    /// same table; duplicate keys overwrite.
    ///
    /// Failure is reported through the returned [`LoadOutcome`] rather than
    /// an error value: when the path cannot be opened the outcome carries the
    /// underlying OS error description and the table is left unchanged.
    /// Malformed lines never fail the load; missing or non-numeric fields are
    /// zero-filled and counted in the outcome statistics.
    ///
    /// The file handle is released when the read phase ends, on every exit
    /// path.
    pub fn load_zip_codes_with_config(
        &mut self,
        path: impl AsRef<Path>,
        config: &LoaderConfig,
    ) -> LoadOutcome {
        let path = path.as_ref();
        info!("Loading zip code table from {}", path.display());

        if let Err(e) = config.validate() {
            warn!("Rejected loader configuration: {}", e);
            return LoadOutcome::failed(e.to_string());
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                let error = Error::table_source(path.display().to_string(), e);
                warn!("{}", error);
                return LoadOutcome::failed(error.to_string());
            }
        };

        match self.read_records(BufReader::new(file), config) {
            Ok(stats) => {
                info!("{} from {}", stats.summary(), path.display());
                LoadOutcome::succeeded(
                    format!(
                        "Loaded {} zip codes from '{}'",
                        stats.records_loaded,
                        path.display()
                    ),
                    stats,
                )
            }
            Err(e) => {
                warn!("Load of {} failed: {}", path.display(), e);
                LoadOutcome::failed(format!(
                    "An error occurred while reading '{}': {}",
                    path.display(),
                    e
                ))
            }
        }
    }

    /// Read records from an open source and insert them streaming-style
    ///
    /// One record per line: the configured positions carry the zip code,
    /// latitude, and longitude. Short lines are zero-filled uniformly; a line
    /// with no fields at all produces no record.
    pub(crate) fn read_records<R: BufRead>(
        &mut self,
        reader: R,
        config: &LoaderConfig,
    ) -> Result<LoadStats> {
        let start = Instant::now();
        let mut stats = LoadStats::new();

        for line in reader.lines() {
            let line =
                line.map_err(|e| Error::io("Failed to read line from zip code table", e))?;
            stats.lines_read += 1;

            let fields = split_fields(&line, config.delimiter);
            if fields.is_empty() {
                continue;
            }

            if fields.len() < config.min_field_count {
                stats.short_lines += 1;
                debug!(
                    "Zero-filling short line {}: {} fields, expected at least {}",
                    stats.lines_read,
                    fields.len(),
                    config.min_field_count
                );
            }

            let zip_code = zip_or_zero(
                field_at(&fields, config.zip_code_field),
                stats.lines_read,
                &mut stats,
            );
            let coordinate = Coordinate::new(
                degrees_or_zero(
                    field_at(&fields, config.latitude_field),
                    stats.lines_read,
                    &mut stats,
                ),
                degrees_or_zero(
                    field_at(&fields, config.longitude_field),
                    stats.lines_read,
                    &mut stats,
                ),
            );

            self.entries.insert(zip_code, coordinate);
            stats.records_loaded += 1;
        }

        stats.load_duration = start.elapsed();
        Ok(stats)
    }
}

/// Get the field at `index`, reading missing positions as empty
fn field_at(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

/// Lenient zip code conversion: non-numeric text is counted and becomes 0
fn zip_or_zero(field: &str, line_number: usize, stats: &mut LoadStats) -> i32 {
    match parse_zip_code(field) {
        Some(zip_code) => zip_code,
        None => {
            if !field.is_empty() {
                stats.malformed_fields += 1;
                warn!(
                    "Non-numeric zip code '{}' on line {}, substituting 0",
                    field, line_number
                );
            }
            0
        }
    }
}

/// Lenient degree conversion: non-numeric text is counted and becomes 0.0
fn degrees_or_zero(field: &str, line_number: usize, stats: &mut LoadStats) -> f64 {
    match parse_degrees(field) {
        Some(degrees) => degrees,
        None => {
            if !field.is_empty() {
                stats.malformed_fields += 1;
                warn!(
                    "Non-numeric coordinate field '{}' on line {}, substituting 0.0",
                    field, line_number
                );
            }
            0.0
        }
    }
}
