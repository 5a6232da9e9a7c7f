//! Zip Code Gazetteer Library
//!
//! A Rust library for loading zip code coordinate tables from delimited text
//! files and serving fast in-memory latitude/longitude lookups.
//!
//! This library provides tools for:
//! - Splitting raw table lines into trimmed fields with defined boundary behavior
//! - Lenient numeric conversion with a uniform zero-fill policy for bad records
//! - Building a unique-keyed zip code table with O(1) coordinate lookups
//! - A total lookup operation returning a documented (0,0) sentinel for absent keys

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_parser;
        pub mod zip_table;
    }
}

// Re-export commonly used types
pub use app::models::{Coordinate, ZipCodeRecord};
pub use app::services::zip_table::ZipCodeTable;
pub use app::services::zip_table::metadata::{LoadOutcome, LoadStats};
pub use config::LoaderConfig;

/// Result type alias for the gazetteer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for table loading and configuration
///
/// These never cross the loading boundary directly: the loader folds them into
/// the `(success, message)` pair of [`LoadOutcome`] so callers keep the coarse
/// two-outcome contract.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The table source could not be opened for reading
    #[error("An error occurred while attempting to open the zip code table '{path}': {source}")]
    TableSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a table source error for a path that could not be opened
    pub fn table_source(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::TableSource {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
