//! Load outcome and statistics tracking
//!
//! This module defines the result pair reported by the loading methods and
//! the counters collected while a table file is read.

use std::time::Duration;

/// Outcome of a load attempt
///
/// The `success` flag and diagnostic `message` form the coarse result
/// contract of the loader: open failures and read errors surface here rather
/// than as error values. `stats` carries supplementary per-load counters.
/// Transient; not persisted anywhere.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Whether the load ran to the end of input without a fatal error
    pub success: bool,

    /// Human-readable confirmation or failure description
    pub message: String,

    /// Counters collected during the load
    pub stats: LoadStats,
}

impl LoadOutcome {
    /// Create a successful outcome
    pub fn succeeded(message: impl Into<String>, stats: LoadStats) -> Self {
        Self {
            success: true,
            message: message.into(),
            stats,
        }
    }

    /// Create a failed outcome
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            stats: LoadStats::new(),
        }
    }
}

/// Statistics about a single load pass
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of lines read from the source
    pub lines_read: usize,

    /// Number of records inserted into the table
    pub records_loaded: usize,

    /// Lines with fewer fields than expected (zero-filled)
    pub short_lines: usize,

    /// Numeric fields that failed to parse (zero-filled)
    pub malformed_fields: usize,

    /// Time taken by the load pass
    pub load_duration: Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the loading rate in records per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.records_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Check whether any fields needed zero-fill substitution
    pub fn has_substitutions(&self) -> bool {
        self.short_lines > 0 || self.malformed_fields > 0
    }

    /// Get a summary string of the load pass
    pub fn summary(&self) -> String {
        format!(
            "Read {} lines, loaded {} records ({} short lines, {} malformed fields) in {:.2}s",
            self.lines_read,
            self.records_loaded,
            self.short_lines,
            self.malformed_fields,
            self.load_duration.as_secs_f64()
        )
    }
}
