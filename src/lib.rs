//! # plate_formatter
//!
//! As-you-type formatting for licence plate input fields.
//!
//! Every time a bound field changes, its raw value is re-normalized and
//! re-segmented into hyphen-separated groups: separators go where digits
//! meet letters, 4-character runs are split in half, and the result never
//! holds more than two separators. A value that is already formatted is
//! never written back, so the cursor is left alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use plate_formatter::{format_plate, reformat, Reformat};
//!
//! assert_eq!(format_plate("1234ab"), "12-34-AB");
//! assert_eq!(format_plate("AB1234CD"), "AB-12-34CD");
//! assert_eq!(format_plate("ab-12 34"), "AB-12-34");
//!
//! // Fixed point: nothing to write
//! assert_eq!(reformat("AB-12-34"), Reformat::Unchanged);
//! ```
//!
//! ## Binding Fields
//!
//! ```rust
//! use plate_formatter::field::{FieldEvent, MemoryField, PlateController};
//!
//! let mut controller = PlateController::new();
//! let ids = controller.attach(vec![
//!     MemoryField::marked("12ab34"),
//!     MemoryField::new("unrelated input"),
//! ]);
//! assert_eq!(ids.len(), 1);
//!
//! controller.handle(ids[0], FieldEvent::Change).unwrap();
//! assert_eq!(controller.field(ids[0]).unwrap().value(), Some("12-AB-34"));
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use plate_formatter::stream::FormatExt;
//!
//! let lines = ["ab12cd", "12ab34"];
//! let formatted: Vec<_> = lines.iter().copied().format_plates().collect();
//! assert_eq!(formatted, ["AB-12-CD", "12-AB-34"]);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |
//! | `wasm` | WebAssembly bindings for browser fields |
//! | `parallel` | Rayon-based batch formatting |
//! | `tracing` | Trace events from the field controller |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod class;
pub mod error;
pub mod field;
pub mod format;
pub mod stream;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use batch::BatchFormatter;
pub use class::{CharacterClass, SEPARATOR};
pub use error::FieldError;
pub use field::{FieldEvent, FieldId, MemoryField, PlateController, PlateInput, MARKER_CLASS};
pub use format::{format_plate, format_value, is_formatted, reformat, Reformat};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        assert_eq!(format_plate("1234ab"), "12-34-AB");
        assert_eq!(format_plate("AB1234CD"), "AB-12-34CD");
        assert_eq!(format_plate("ab-12 34"), "AB-12-34");
        assert_eq!(format_plate("ab-12 34"), format_plate("AB1234"));
        assert_eq!(format_plate(""), "");
        assert_eq!(format_value(None), None);
    }

    #[test]
    fn test_empty_is_not_written() {
        assert_eq!(reformat(""), Reformat::Unchanged);
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Reformat>();
        assert_send_sync::<FieldError>();
        assert_send_sync::<BatchFormatter>();
        assert_send_sync::<PlateController<MemoryField>>();
    }
}
