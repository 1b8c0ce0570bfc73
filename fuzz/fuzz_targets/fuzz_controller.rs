//! Fuzz target for the field controller.
//!
//! Replays arbitrary typing sessions and checks that a field is never
//! written with a value it already holds.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use plate_formatter::field::{FieldEvent, FieldId, MemoryField, PlateController};

#[derive(Debug, Arbitrary)]
enum Step {
    Type { field: u8, value: String },
    Event { field: u8, keyup: bool },
}

fuzz_target!(|steps: Vec<Step>| {
    let mut controller = PlateController::new();
    for _ in 0..3 {
        controller.bind(MemoryField::marked(""));
    }

    for step in steps {
        match step {
            Step::Type { field, value } => {
                if let Some(f) = controller.field_mut(FieldId::new(field as usize)) {
                    f.type_value(value);
                }
            }
            Step::Event { field, keyup } => {
                let id = FieldId::new(field as usize);
                let before = controller.field(id).and_then(|f| f.value().map(str::to_owned));
                let event = if keyup { FieldEvent::KeyUp } else { FieldEvent::Change };

                match controller.handle(id, event) {
                    Ok(outcome) => {
                        if let Some(written) = outcome.value() {
                            assert_ne!(before.as_deref(), Some(written));
                        }
                    }
                    Err(_) => assert!(id.index() >= controller.len()),
                }
            }
        }
    }
});
