//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use proptest::prelude::*;
use plate_formatter::{
    field::{FieldEvent, MemoryField, PlateController},
    format::{self, format_plate, format_value, is_formatted, reformat, Reformat},
    stream::FormatExt,
    SEPARATOR,
};

// =============================================================================
// STRATEGIES
// =============================================================================

/// Plate-like characters: ASCII letters and digits.
fn plate_string(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            prop::char::range('0', '9'),
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
        ],
        0..=max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Interleaves spaces and hyphens into a value.
fn with_separators(value: String) -> impl Strategy<Value = String> {
    let len = value.chars().count();
    proptest::collection::vec(prop_oneof![Just(""), Just(" "), Just("-"), Just(" - ")], len + 1)
        .prop_map(move |seps| {
            let mut result = String::new();
            for (i, c) in value.chars().enumerate() {
                result.push_str(seps[i]);
                result.push(c);
            }
            result.push_str(seps[len]);
            result
        })
}

fn strip(value: &str) -> String {
    value.chars().filter(|&c| c != ' ' && c != SEPARATOR).collect()
}

// =============================================================================
// FORMATTER PROPERTIES
// =============================================================================

proptest! {
    /// Property: Formatting never panics on arbitrary input.
    #[test]
    fn format_never_panics(input in ".*") {
        let _ = format_plate(&input);
        let _ = reformat(&input);
        let _ = format::split_segments(&input);
    }

    /// Property: A formatted value is a fixed point.
    #[test]
    fn format_is_idempotent(input in plate_string(12)) {
        let once = format_plate(&input);
        let twice = format_plate(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(is_formatted(&once));
    }

    /// Property: Idempotence holds for arbitrary text too.
    #[test]
    fn format_is_idempotent_on_any_ascii(input in "[ -~]{0,16}") {
        let once = format_plate(&input);
        prop_assert_eq!(format_plate(&once), once);
    }

    /// Property: Removing separators from the output gives the uppercased,
    /// normalized input.
    #[test]
    fn format_preserves_characters(input in "[ -~]{0,20}") {
        let formatted = format_plate(&input);
        let expected = format::normalize(&input).to_uppercase();
        prop_assert_eq!(strip(&formatted), expected);
    }

    /// Property: Output never holds more than two separators.
    #[test]
    fn format_bounds_separators(input in ".{0,32}") {
        let formatted = format_plate(&input);
        prop_assert!(formatted.matches(SEPARATOR).count() <= 2);
    }

    /// Property: Output has no empty segment, so no leading, trailing or
    /// doubled separator.
    #[test]
    fn format_has_no_empty_segments(input in plate_string(16)) {
        let formatted = format_plate(&input);
        if !formatted.is_empty() {
            prop_assert!(formatted.split(SEPARATOR).all(|s| !s.is_empty()));
        }
    }

    /// Property: Existing spaces and hyphens never affect the result.
    #[test]
    fn separators_in_input_are_ignored(
        formatted_pair in plate_string(10).prop_flat_map(|v| (Just(v.clone()), with_separators(v)))
    ) {
        let (clean, messy) = formatted_pair;
        prop_assert_eq!(format_plate(&clean), format_plate(&messy));
    }

    /// Property: Output is uppercase.
    #[test]
    fn format_is_uppercase(input in plate_string(12)) {
        let formatted = format_plate(&input);
        prop_assert_eq!(formatted.to_uppercase(), formatted);
    }

    /// Property: Present input is formatted, absent input passes through.
    #[test]
    fn format_value_matches_format_plate(input in proptest::option::of(plate_string(10))) {
        let expected = input.as_deref().map(format_plate);
        prop_assert_eq!(format_value(input.as_deref()), expected);
    }

    /// Property: reformat only reports a change when the value differs.
    #[test]
    fn reformat_unchanged_iff_equal(input in "[ -~]{0,12}") {
        match reformat(&input) {
            Reformat::Unchanged => {
                prop_assert_eq!(format_plate(&input), input);
            }
            Reformat::Rewrite(value) => {
                prop_assert_ne!(value, input);
            }
        }
    }

    /// Property: The stream adapter matches single formatting.
    #[test]
    fn stream_matches_single(values in proptest::collection::vec(plate_string(8), 0..20)) {
        let streamed: Vec<String> = values.iter().format_plates().collect();
        let single: Vec<String> = values.iter().map(|v| format_plate(v)).collect();
        prop_assert_eq!(streamed, single);
    }
}

// =============================================================================
// CONTROLLER PROPERTIES
// =============================================================================

proptest! {
    /// Property: A field is written at most once per typed value, and a
    /// second event on the same value writes nothing.
    #[test]
    fn controller_writes_only_on_change(typed in proptest::collection::vec(plate_string(8), 1..10)) {
        let mut controller = PlateController::new();
        let id = controller.bind(MemoryField::marked(""));
        let mut expected_writes = 0;

        for value in &typed {
            controller.field_mut(id).unwrap().type_value(value.clone());
            if controller.handle(id, FieldEvent::KeyUp).unwrap().is_changed() {
                expected_writes += 1;
            }
            prop_assert!(!controller.handle(id, FieldEvent::Change).unwrap().is_changed());
        }

        let field = controller.field(id).unwrap();
        prop_assert_eq!(field.write_count(), expected_writes);
        let expected = format_plate(typed.last().unwrap());
        prop_assert_eq!(field.value(), Some(expected.as_str()));
    }
}
