//! Node.js bindings for plate_formatter.
//!
//! This crate provides native Node.js bindings using napi-rs.
//!
//! # Usage
//!
//! ```javascript
//! const { formatPlate, reformatPlate, splitSegments } = require('plate-formatter');
//!
//! formatPlate("ab-12 34");       // "AB-12-34"
//! formatPlate(undefined);        // undefined
//!
//! const result = reformatPlate("12-34-AB");
//! if (result.changed) {
//!     input.value = result.value;
//! }
//! ```

use napi::bindgen_prelude::*;
use napi_derive::napi;

use plate_formatter::{batch::BatchFormatter, batch::DEFAULT_BATCH_LIMIT, format, Reformat};

/// Result of formatting a value.
#[napi(object)]
pub struct ReformatResult {
    pub changed: bool,
    pub value: String,
}

/// Formats a plate value. Absent values pass through.
///
/// @param value - Raw field value
/// @returns Formatted value, or undefined
#[napi]
pub fn format_plate(value: Option<String>) -> Option<String> {
    format::format_value(value.as_deref())
}

/// Formats a value and reports whether it differs from the input.
///
/// @param value - Raw field value
/// @returns ReformatResult with the value to display
#[napi]
pub fn reformat_plate(value: String) -> ReformatResult {
    match format::reformat(&value) {
        Reformat::Unchanged => ReformatResult {
            changed: false,
            value,
        },
        Reformat::Rewrite(formatted) => ReformatResult {
            changed: true,
            value: formatted,
        },
    }
}

/// Checks whether a value is already formatted.
#[napi]
pub fn is_formatted(value: String) -> bool {
    format::is_formatted(&value)
}

/// Returns the segments of a formatted value.
///
/// @param value - Raw field value
/// @returns Array of segments, e.g. ["AB", "12", "34"]
#[napi]
pub fn split_segments(value: String) -> Vec<String> {
    format::split_segments(&value)
}

/// Formats many values at once.
///
/// @param values - Raw values, at most 1000
/// @returns Formatted values in input order
#[napi]
pub fn format_batch(values: Vec<String>) -> Result<Vec<String>> {
    BatchFormatter::with_limit(DEFAULT_BATCH_LIMIT)
        .format_all(&values)
        .map_err(|e| Error::new(Status::InvalidArg, e.to_string()))
}
