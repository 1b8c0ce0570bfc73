//! Licence plate formatting.
//!
//! Raw field input goes through a fixed pipeline:
//!
//! 1. [`normalize`] strips spaces and hyphens.
//! 2. [`segment`] inserts a separator at the first two digit/non-digit
//!    transitions.
//! 3. [`repair`] splits every 4-character segment in half, since a run of
//!    same-class characters has no transition to split on.
//! 4. [`trim_leading_separator`] drops a stray leading separator.
//! 5. [`collapse`] folds everything past the third segment into the third.
//!
//! [`format_plate`] runs the whole pipeline on the uppercased normalized
//! value, and [`reformat`] compares the result against the raw input so
//! callers can skip writing a value that is already in its final form.
//!
//! # Example
//!
//! ```
//! use plate_formatter::format::{format_plate, reformat, Reformat};
//!
//! assert_eq!(format_plate("1234ab"), "12-34-AB");
//! assert_eq!(format_plate("ab-12 34"), "AB-12-34");
//!
//! // Already formatted: nothing to write back
//! assert_eq!(reformat("12-34-AB"), Reformat::Unchanged);
//! ```

use crate::class::{is_transition, SEPARATOR};

/// Most separators a formatted plate may contain.
pub const MAX_SEPARATORS: usize = 2;

/// Segment length that [`repair`] splits in half.
const REPAIR_LENGTH: usize = 4;

/// Outcome of formatting a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reformat {
    /// The value is already formatted; the field must not be written.
    Unchanged,
    /// The field should be overwritten with this value.
    Rewrite(String),
}

impl Reformat {
    /// Returns true if the field needs a write.
    #[inline]
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Rewrite(_))
    }

    /// Returns the value to write, if any.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Unchanged => None,
            Self::Rewrite(value) => Some(value),
        }
    }

    /// Consumes the outcome and returns the value to write, if any.
    #[inline]
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Unchanged => None,
            Self::Rewrite(value) => Some(value),
        }
    }
}

/// Removes every space and hyphen, keeping the order of everything else.
///
/// # Example
///
/// ```
/// use plate_formatter::format::normalize;
///
/// assert_eq!(normalize("ab-12 34"), "ab1234");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|&c| c != ' ' && c != SEPARATOR).collect()
}

/// Inserts separators at class transitions.
///
/// At most [`MAX_SEPARATORS`] separators end up in the output, counted
/// literally, so any separator already present in `normalized` counts
/// toward the bound.
///
/// # Example
///
/// ```
/// use plate_formatter::format::segment;
///
/// assert_eq!(segment("AB1234CD"), "AB-1234-CD");
/// assert_eq!(segment("A1B2C3"), "A-1-B2C3");
/// ```
pub fn segment(normalized: &str) -> String {
    let mut out = String::with_capacity(normalized.len() + MAX_SEPARATORS);
    let mut separators = 0;
    let mut chars = normalized.chars().peekable();

    while let Some(current) = chars.next() {
        out.push(current);
        if current == SEPARATOR {
            separators += 1;
        }

        if let Some(&next) = chars.peek() {
            if separators < MAX_SEPARATORS && is_transition(current, next) {
                out.push(SEPARATOR);
                separators += 1;
            }
        }
    }

    out
}

/// Splits every 4-character segment into two halves of two.
///
/// Segments are collected once up front. For each qualifying segment only
/// the first occurrence of its text in the working buffer is replaced, which
/// may land inside an earlier, longer segment.
///
/// # Example
///
/// ```
/// use plate_formatter::format::repair;
///
/// assert_eq!(repair("1234-ab"), "12-34-ab");
/// assert_eq!(repair("AB-1234-CD"), "AB-12-34-CD");
/// ```
pub fn repair(working: &str) -> String {
    let mut out = working.to_owned();

    for segment in working.split(SEPARATOR) {
        if segment.chars().count() != REPAIR_LENGTH {
            continue;
        }
        // Byte offset of the third character
        let mid = segment
            .char_indices()
            .nth(REPAIR_LENGTH / 2)
            .map_or(segment.len(), |(i, _)| i);
        let (head, tail) = segment.split_at(mid);

        let mut replacement = String::with_capacity(segment.len() + 1);
        replacement.push_str(head);
        replacement.push(SEPARATOR);
        replacement.push_str(tail);

        out = out.replacen(segment, &replacement, 1);
    }

    out
}

/// Drops a single leading separator.
#[inline]
pub fn trim_leading_separator(working: &str) -> &str {
    working.strip_prefix(SEPARATOR).unwrap_or(working)
}

/// Caps the buffer at three segments.
///
/// With four or more segments the result is the first two segments, each
/// followed by a separator, then every remaining segment concatenated.
///
/// # Example
///
/// ```
/// use plate_formatter::format::collapse;
///
/// assert_eq!(collapse("AB-12-34-CD"), "AB-12-34CD");
/// assert_eq!(collapse("12-34-AB"), "12-34-AB");
/// ```
pub fn collapse(working: &str) -> String {
    let segments: Vec<&str> = working.split(SEPARATOR).collect();
    if segments.len() <= MAX_SEPARATORS + 1 {
        return working.to_owned();
    }

    let mut out = String::with_capacity(working.len());
    for segment in &segments[..MAX_SEPARATORS] {
        out.push_str(segment);
        out.push(SEPARATOR);
    }
    for segment in &segments[MAX_SEPARATORS..] {
        out.push_str(segment);
    }
    out
}

/// Formats a raw plate value.
///
/// Uppercasing happens before segmentation, so [`repair`] sees the same
/// text whatever the input's case and formatted values stay fixed points.
///
/// # Example
///
/// ```
/// use plate_formatter::format::format_plate;
///
/// assert_eq!(format_plate("1234ab"), "12-34-AB");
/// assert_eq!(format_plate("AB1234CD"), "AB-12-34CD");
/// assert_eq!(format_plate(""), "");
/// ```
pub fn format_plate(raw: &str) -> String {
    let normalized = normalize(raw).to_uppercase();
    let repaired = repair(&segment(&normalized));
    collapse(trim_leading_separator(&repaired))
}

/// Formats a value that may be absent. Absent values pass through.
///
/// # Example
///
/// ```
/// use plate_formatter::format::format_value;
///
/// assert_eq!(format_value(Some("ab12cd")), Some("AB-12-CD".to_string()));
/// assert_eq!(format_value(None), None);
/// ```
#[inline]
pub fn format_value(raw: Option<&str>) -> Option<String> {
    raw.map(format_plate)
}

/// Formats `raw` and reports whether the field needs rewriting.
///
/// The comparison is against `raw` exactly as given, before any
/// normalization.
///
/// # Example
///
/// ```
/// use plate_formatter::format::{reformat, Reformat};
///
/// assert_eq!(reformat("12-34-ab"), Reformat::Rewrite("12-34-AB".into()));
/// assert_eq!(reformat("12-34-AB"), Reformat::Unchanged);
/// assert_eq!(reformat(""), Reformat::Unchanged);
/// ```
pub fn reformat(raw: &str) -> Reformat {
    let formatted = format_plate(raw);
    if formatted == raw {
        Reformat::Unchanged
    } else {
        Reformat::Rewrite(formatted)
    }
}

/// Formats `raw` and returns its segments.
///
/// # Example
///
/// ```
/// use plate_formatter::format::split_segments;
///
/// assert_eq!(split_segments("ab1234"), vec!["AB", "12", "34"]);
/// assert!(split_segments("").is_empty());
/// ```
pub fn split_segments(raw: &str) -> Vec<String> {
    format_plate(raw)
        .split(SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Returns true if formatting `value` would leave it untouched.
#[inline]
pub fn is_formatted(value: &str) -> bool {
    !reformat(value).is_changed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_spaces_and_hyphens() {
        assert_eq!(normalize("ab-12 34"), "ab1234");
        assert_eq!(normalize(" - -  "), "");
        assert_eq!(normalize("x.y_z"), "x.y_z");
    }

    #[test]
    fn test_segment_first_two_transitions() {
        assert_eq!(segment("ab1234"), "ab-1234");
        assert_eq!(segment("1234ab"), "1234-ab");
        assert_eq!(segment("AB1234CD"), "AB-1234-CD");
        assert_eq!(segment("A1B2C3"), "A-1-B2C3");
    }

    #[test]
    fn test_segment_without_transitions() {
        assert_eq!(segment(""), "");
        assert_eq!(segment("1234"), "1234");
        assert_eq!(segment("ABCDEF"), "ABCDEF");
    }

    #[test]
    fn test_segment_counts_existing_separators() {
        assert_eq!(segment("A-1B2"), "A-1-B2");
        assert_eq!(segment("A--1B"), "A--1B");
    }

    #[test]
    fn test_repair_splits_four_character_segments() {
        assert_eq!(repair("1234-ab"), "12-34-ab");
        assert_eq!(repair("AB-1234-CD"), "AB-12-34-CD");
        assert_eq!(repair("ABCD"), "AB-CD");
    }

    #[test]
    fn test_repair_leaves_other_lengths() {
        assert_eq!(repair("ABC-12"), "ABC-12");
        assert_eq!(repair("12345"), "12345");
        assert_eq!(repair(""), "");
    }

    #[test]
    fn test_repair_replaces_first_occurrence() {
        // "ABCD" first occurs inside "ABCDE"
        assert_eq!(repair("ABCDE-1-ABCD"), "AB-CDE-1-ABCD");
    }

    #[test]
    fn test_repair_duplicate_segments() {
        assert_eq!(repair("ABCD-1234-ABCD"), "AB-CD-12-34-AB-CD");
    }

    #[test]
    fn test_trim_leading_separator() {
        assert_eq!(trim_leading_separator("-AB"), "AB");
        assert_eq!(trim_leading_separator("AB-"), "AB-");
        assert_eq!(trim_leading_separator("--AB"), "-AB");
        assert_eq!(trim_leading_separator(""), "");
    }

    #[test]
    fn test_collapse() {
        assert_eq!(collapse("AB-12-34-CD"), "AB-12-34CD");
        assert_eq!(collapse("1-2-3-4-5"), "1-2-345");
        assert_eq!(collapse("12-34-AB"), "12-34-AB");
        assert_eq!(collapse("AB"), "AB");
    }

    #[test]
    fn test_format_scenarios() {
        assert_eq!(format_plate("1234ab"), "12-34-AB");
        assert_eq!(format_plate("AB1234CD"), "AB-12-34CD");
        assert_eq!(format_plate("ab-12 34"), "AB-12-34");
        assert_eq!(format_plate("AB1234"), "AB-12-34");
        assert_eq!(format_plate(""), "");
    }

    #[test]
    fn test_format_common_layouts() {
        assert_eq!(format_plate("ab12cd"), "AB-12-CD");
        assert_eq!(format_plate("12ab34"), "12-AB-34");
        assert_eq!(format_plate("abcd12"), "AB-CD-12");
        assert_eq!(format_plate("12abc3"), "12-ABC-3");
        assert_eq!(format_plate("1abc23"), "1-ABC-23");
        assert_eq!(format_plate("ab123c"), "AB-123-C");
    }

    #[test]
    fn test_format_no_transitions() {
        assert_eq!(format_plate("12345678"), "12345678");
        assert_eq!(format_plate("1234"), "12-34");
        assert_eq!(format_plate("abc"), "ABC");
    }

    #[test]
    fn test_format_caps_separators() {
        assert_eq!(format_plate("a1b2c3d4"), "A-1-B2C3D4");
        assert_eq!(format_plate("ABCDE1ABCD"), "AB-CDE-1ABCD");
    }

    #[test]
    fn test_format_mixed_case_is_fixed_point() {
        let formatted = format_plate("abcde1ABCD");
        assert_eq!(formatted, "AB-CDE-1ABCD");
        assert_eq!(format_plate(&formatted), formatted);
    }

    #[test]
    fn test_reformat_mixed_case_first_pass() {
        let raw = "abcde1ABCD";
        assert_eq!(
            reformat(raw),
            Reformat::Rewrite("AB-CDE-1ABCD".to_string())
        );
        assert_eq!(reformat("AB-CDE-1ABCD"), Reformat::Unchanged);
    }

    #[test]
    fn test_format_value_absent() {
        assert_eq!(format_value(None), None);
        assert_eq!(format_value(Some("")), Some(String::new()));
    }

    #[test]
    fn test_reformat() {
        assert_eq!(reformat("12-34-AB"), Reformat::Unchanged);
        assert_eq!(reformat("12-34-ab"), Reformat::Rewrite("12-34-AB".into()));
        assert_eq!(reformat(""), Reformat::Unchanged);
        assert_eq!(reformat("  "), Reformat::Rewrite(String::new()));
    }

    #[test]
    fn test_reformat_accessors() {
        let outcome = reformat("ab12cd");
        assert!(outcome.is_changed());
        assert_eq!(outcome.value(), Some("AB-12-CD"));
        assert_eq!(outcome.into_value(), Some("AB-12-CD".to_string()));

        assert_eq!(Reformat::Unchanged.value(), None);
        assert_eq!(Reformat::Unchanged.into_value(), None);
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("ab1234"), vec!["AB", "12", "34"]);
        assert_eq!(split_segments("AB1234CD"), vec!["AB", "12", "34CD"]);
        assert!(split_segments(" - ").is_empty());
    }

    #[test]
    fn test_is_formatted() {
        assert!(is_formatted("AB-12-34"));
        assert!(is_formatted(""));
        assert!(!is_formatted("AB1234"));
        assert!(!is_formatted("ab-12-34"));
    }
}
