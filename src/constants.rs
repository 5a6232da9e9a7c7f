//! Application constants for the zip code gazetteer
//!
//! This module contains the default table format values: the field delimiter,
//! the expected field count, and the record positions of the zip code and
//! coordinate fields.

// =============================================================================
// Table Format Defaults
// =============================================================================

/// Field delimiter used by zip code table files
pub const FIELD_DELIMITER: char = ',';

/// Minimum number of fields expected per record
pub const MIN_FIELD_COUNT: usize = 4;

/// Record position of the zip code field
pub const ZIP_CODE_FIELD: usize = 0;

/// Record position of the latitude field
pub const LATITUDE_FIELD: usize = 2;

/// Record position of the longitude field
pub const LONGITUDE_FIELD: usize = 3;
