//! Loader configuration and validation.
//!
//! Provides the configuration structure describing the table file format:
//! the field delimiter, the expected field count, and the record positions
//! of the zip code and coordinate fields.

use crate::constants::{
    FIELD_DELIMITER, LATITUDE_FIELD, LONGITUDE_FIELD, MIN_FIELD_COUNT, ZIP_CODE_FIELD,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Table format configuration for the loader
///
/// The defaults describe the classic zip code table layout:
/// `zip,<ignored>,latitude,longitude,...` with a comma delimiter and at least
/// four fields per record. Lines shorter than `min_field_count` are
/// zero-filled rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Single-character field delimiter
    pub delimiter: char,

    /// Minimum number of fields expected per record
    pub min_field_count: usize,

    /// Record position of the zip code field
    pub zip_code_field: usize,

    /// Record position of the latitude field
    pub latitude_field: usize,

    /// Record position of the longitude field
    pub longitude_field: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
            min_field_count: MIN_FIELD_COUNT,
            zip_code_field: ZIP_CODE_FIELD,
            latitude_field: LATITUDE_FIELD,
            longitude_field: LONGITUDE_FIELD,
        }
    }
}

impl LoaderConfig {
    /// Validate that the configured field positions fit the expected field count
    pub fn validate(&self) -> Result<()> {
        if self.min_field_count == 0 {
            return Err(Error::configuration(
                "min_field_count must be at least 1".to_string(),
            ));
        }

        for (name, index) in [
            ("zip_code_field", self.zip_code_field),
            ("latitude_field", self.latitude_field),
            ("longitude_field", self.longitude_field),
        ] {
            if index >= self.min_field_count {
                return Err(Error::configuration(format!(
                    "{} position {} does not fit within the expected field count {}",
                    name, index, self.min_field_count
                )));
            }
        }

        Ok(())
    }
}
