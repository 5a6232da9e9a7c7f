//! Field extraction for zip code table lines
//!
//! This module provides the pure splitting and conversion helpers the loader
//! drives once per line: delimiter handling, trailing line terminators, and
//! empty fields behave the same regardless of table state.

/// Split a raw line into ordered, trimmed fields on a single-character delimiter
///
/// Boundary behavior:
/// - an empty line (or bare line terminator) yields no fields
/// - a line with no delimiter yields a single field
/// - consecutive delimiters yield empty fields
/// - a trailing delimiter yields a trailing empty field
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Vec::new();
    }

    line.split(delimiter)
        .map(|field| field.trim().to_string())
        .collect()
}

/// Parse a zip code field
///
/// Returns `None` for empty or non-numeric text; the loader substitutes 0
/// under the zero-fill policy.
pub fn parse_zip_code(field: &str) -> Option<i32> {
    field.parse::<i32>().ok()
}

/// Parse a latitude or longitude field in decimal degrees
///
/// Returns `None` for empty or non-numeric text; the loader substitutes 0.0
/// under the zero-fill policy.
pub fn parse_degrees(field: &str) -> Option<f64> {
    field.parse::<f64>().ok()
}
