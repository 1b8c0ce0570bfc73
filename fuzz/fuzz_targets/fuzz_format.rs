//! Fuzz target for plate formatting.
//!
//! Tests that formatting never panics and keeps its invariants on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use plate_formatter::{format, SEPARATOR};

fuzz_target!(|data: &str| {
    // These should never panic
    let normalized = format::normalize(data);
    let _ = format::segment(&normalized);
    let _ = format::repair(data);
    let _ = format::collapse(data);
    let _ = format::trim_leading_separator(data);
    let _ = format::split_segments(data);

    let formatted = format::format_plate(data);

    assert!(
        formatted.matches(SEPARATOR).count() <= 2,
        "at most two separators: {:?}",
        formatted
    );

    let stripped: String = formatted.chars().filter(|&c| c != SEPARATOR).collect();
    assert_eq!(
        stripped,
        normalized.to_uppercase(),
        "formatting must only insert separators"
    );

    if data.is_ascii() {
        assert_eq!(format::format_plate(&formatted), formatted, "fixed point");
    }
});
