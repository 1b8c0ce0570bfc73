//! Field controller example: a simulated typing session.
//!
//! Run with: `cargo run --example controller`

use plate_formatter::field::{FieldEvent, MemoryField, PlateController};

fn main() {
    println!("=== Field Controller ===\n");

    let mut controller = PlateController::new();
    let ids = controller.attach(vec![
        MemoryField::marked(""),
        MemoryField::new("").with_class("postcode"),
    ]);
    println!("Bound {} of 2 fields\n", ids.len());

    let id = ids[0];
    let keystrokes = ["1", "12", "12a", "12-Ab", "12-AB3", "12-AB-34"];

    for typed in keystrokes {
        if let Some(field) = controller.field_mut(id) {
            field.type_value(typed);
        }

        match controller.handle(id, FieldEvent::KeyUp) {
            Ok(outcome) if outcome.is_changed() => {
                println!("  typed {:<10} -> rewritten", format!("{:?}", typed));
            }
            Ok(_) => {
                println!("  typed {:<10} -> left alone", format!("{:?}", typed));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        if let Some(field) = controller.field(id) {
            println!("      field now {:?}", field.value().unwrap_or_default());
        }
    }

    if let Some(field) = controller.field(id) {
        println!("\nWrites: {:?}", field.writes());
    }
}
