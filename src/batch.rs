//! Batch formatting.
//!
//! Every value is formatted independently, so large batches can be spread
//! over a rayon pool with the `parallel` feature.

use crate::error::FieldError;
use crate::format::{format_plate, reformat, Reformat};

/// Largest batch accepted by [`BatchFormatter::with_limit`] by default.
pub const DEFAULT_BATCH_LIMIT: usize = 1000;

/// Formats batches of plate values, optionally enforcing a size limit.
///
/// # Example
///
/// ```
/// use plate_formatter::BatchFormatter;
///
/// let batch = BatchFormatter::new();
/// let values = ["ab12cd", "AB-12-CD"];
/// let formatted = batch.format_all(&values).unwrap();
/// assert_eq!(formatted, ["AB-12-CD", "AB-12-CD"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchFormatter {
    limit: Option<usize>,
}

impl BatchFormatter {
    /// Creates a formatter with no size limit.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter rejecting batches larger than `limit`.
    #[inline]
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    /// The configured limit, if any.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn check<S>(&self, values: &[S]) -> Result<(), FieldError> {
        match self.limit {
            Some(maximum) if values.len() > maximum => Err(FieldError::BatchTooLarge {
                size: values.len(),
                maximum,
            }),
            _ => Ok(()),
        }
    }

    /// Formats every value, in input order.
    pub fn format_all<S: AsRef<str>>(&self, values: &[S]) -> Result<Vec<String>, FieldError> {
        self.check(values)?;
        Ok(format_batch(values))
    }

    /// Formats every value and reports which ones would be rewritten.
    pub fn reformat_all<S: AsRef<str>>(&self, values: &[S]) -> Result<Vec<Reformat>, FieldError> {
        self.check(values)?;
        Ok(values.iter().map(|v| reformat(v.as_ref())).collect())
    }

    /// Returns `(index, formatted)` for the values that would change.
    pub fn changed_only<S: AsRef<str>>(
        &self,
        values: &[S],
    ) -> Result<Vec<(usize, String)>, FieldError> {
        self.check(values)?;
        Ok(values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| reformat(v.as_ref()).into_value().map(|f| (i, f)))
            .collect())
    }

    /// Formats every value on the rayon pool.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn format_parallel<S: AsRef<str> + Sync>(
        &self,
        values: &[S],
    ) -> Result<Vec<String>, FieldError> {
        self.check(values)?;
        Ok(format_batch_parallel(values))
    }
}

/// Formats a slice of values.
///
/// # Example
///
/// ```
/// use plate_formatter::batch::format_batch;
///
/// assert_eq!(format_batch(&["1234ab", ""]), ["12-34-AB", ""]);
/// ```
#[inline]
pub fn format_batch<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| format_plate(v.as_ref())).collect()
}

/// Formats a slice of values in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn format_batch_parallel<S: AsRef<str> + Sync>(values: &[S]) -> Vec<String> {
    use rayon::prelude::*;
    values.par_iter().map(|v| format_plate(v.as_ref())).collect()
}

/// Counts values that would and would not be rewritten.
///
/// # Returns
///
/// Tuple of (changed, unchanged)
///
/// # Example
///
/// ```
/// use plate_formatter::batch::count_changed;
///
/// let (changed, unchanged) = count_changed(&["AB-12-CD", "ab12cd", ""]);
/// assert_eq!(changed, 1);
/// assert_eq!(unchanged, 2);
/// ```
pub fn count_changed<S: AsRef<str>>(values: &[S]) -> (usize, usize) {
    let changed = values
        .iter()
        .filter(|v| reformat(v.as_ref()).is_changed())
        .count();
    (changed, values.len() - changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_all() {
        let batch = BatchFormatter::new();
        let values = vec!["1234ab", "AB1234CD", "ab-12 34"];
        let formatted = batch.format_all(&values).unwrap();
        assert_eq!(formatted, ["12-34-AB", "AB-12-34CD", "AB-12-34"]);
    }

    #[test]
    fn test_reformat_all() {
        let batch = BatchFormatter::new();
        let outcomes = batch.reformat_all(&["AB-12-34", "ab1234"]).unwrap();
        assert_eq!(outcomes[0], Reformat::Unchanged);
        assert_eq!(outcomes[1], Reformat::Rewrite("AB-12-34".into()));
    }

    #[test]
    fn test_changed_only() {
        let batch = BatchFormatter::new();
        let changed = batch
            .changed_only(&["AB-12-34", "ab1234", "", "12ab34"])
            .unwrap();
        assert_eq!(
            changed,
            vec![(1, "AB-12-34".to_string()), (3, "12-AB-34".to_string())]
        );
    }

    #[test]
    fn test_limit() {
        let batch = BatchFormatter::with_limit(2);
        assert_eq!(batch.limit(), Some(2));
        assert!(batch.format_all(&["a", "b"]).is_ok());

        let err = batch.format_all(&["a", "b", "c"]).unwrap_err();
        assert_eq!(
            err,
            FieldError::BatchTooLarge {
                size: 3,
                maximum: 2
            }
        );
    }

    #[test]
    fn test_empty_batch() {
        let values: Vec<&str> = vec![];
        assert!(format_batch(&values).is_empty());
        assert_eq!(count_changed(&values), (0, 0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let values: Vec<String> = (0..1000).map(|i| format!("ab{}cd", i)).collect();
        let sequential = format_batch(&values);
        let parallel = BatchFormatter::new().format_parallel(&values).unwrap();
        assert_eq!(sequential, parallel);
    }
}
