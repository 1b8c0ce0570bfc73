//! Error types for field binding and bulk formatting.
//!
//! Formatting itself never fails. Errors only arise when a caller addresses
//! a field that was never bound, or hands a bulk surface more work than it
//! accepts.

use crate::field::FieldId;
use std::fmt;

/// Errors raised by the field controller and bulk surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// No field is bound under this id.
    UnknownField {
        /// The id that was looked up.
        id: FieldId,
        /// How many fields the controller holds.
        bound: usize,
    },

    /// A batch request exceeded the accepted size.
    BatchTooLarge {
        /// Number of values submitted.
        size: usize,
        /// Largest accepted batch.
        maximum: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField { id, bound } => {
                write!(
                    f,
                    "no field bound as {} ({} field(s) bound)",
                    id, bound
                )
            }

            Self::BatchTooLarge { size, maximum } => {
                write!(
                    f,
                    "batch too large: got {} values, maximum is {}",
                    size, maximum
                )
            }
        }
    }
}

impl std::error::Error for FieldError {}
