//! WebAssembly bindings for browser input fields.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { PlateBindings, format_plate } from 'plate_formatter';
//!
//! await init();
//!
//! const inputs = Array.from(document.querySelectorAll('input'));
//! const bindings = new PlateBindings(inputs);
//!
//! // Only inputs carrying the `licence-plate-input` class were bound
//! bindings.elements().forEach((input, index) => {
//!     for (const event of PlateBindings.events()) {
//!         input.addEventListener(event, () => bindings.handle(index, event));
//!     }
//! });
//!
//! format_plate("1234ab");  // "12-34-AB"
//! ```

#![cfg(feature = "wasm")]

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;

use crate::field::{FieldEvent, FieldId, PlateController, PlateInput};
use crate::format::Reformat;

/// A DOM element accessed through its `value` and `className` properties.
struct JsField(JsValue);

impl JsField {
    fn get(&self, property: &str) -> Option<String> {
        Reflect::get(&self.0, &JsValue::from_str(property))
            .ok()
            .and_then(|v| v.as_string())
    }
}

impl PlateInput for JsField {
    fn value(&self) -> Option<String> {
        self.get("value")
    }

    fn set_value(&mut self, value: &str) {
        // A frozen or detached element rejects the write; the next event retries
        let written = Reflect::set(&self.0, &JsValue::from_str("value"), &JsValue::from_str(value));

        #[cfg(feature = "tracing")]
        match written {
            Ok(true) => {}
            Ok(false) => tracing::debug!(value, "element rejected value write"),
            Err(ref error) => tracing::debug!(value, ?error, "value write threw"),
        }
        #[cfg(not(feature = "tracing"))]
        let _ = written;
    }

    fn has_class(&self, class: &str) -> bool {
        self.get("className")
            .is_some_and(|names| names.split_whitespace().any(|n| n == class))
    }
}

fn parse_event(name: &str) -> Result<FieldEvent, JsValue> {
    FieldEvent::from_name(name)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown event: {}", name)))
}

/// Result of formatting a value, returned to JavaScript.
#[wasm_bindgen]
pub struct ReformatResult {
    changed: bool,
    value: String,
}

#[wasm_bindgen]
impl ReformatResult {
    /// Whether the formatted value differs from the input.
    #[wasm_bindgen(getter)]
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// The formatted value, or the input itself when unchanged.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }
}

/// Formats a plate value. `undefined` and `null` pass through.
///
/// # Example
/// ```javascript
/// format_plate("ab-12 34")  // "AB-12-34"
/// format_plate(undefined)   // undefined
/// ```
#[wasm_bindgen]
pub fn format_plate(value: Option<String>) -> Option<String> {
    crate::format::format_value(value.as_deref())
}

/// Formats a value and reports whether it differs from the input.
#[wasm_bindgen]
pub fn reformat_plate(value: &str) -> ReformatResult {
    match crate::format::reformat(value) {
        Reformat::Unchanged => ReformatResult {
            changed: false,
            value: value.to_string(),
        },
        Reformat::Rewrite(formatted) => ReformatResult {
            changed: true,
            value: formatted,
        },
    }
}

/// Checks whether a value is already formatted.
#[wasm_bindgen]
pub fn is_formatted(value: &str) -> bool {
    crate::format::is_formatted(value)
}

/// The formatter bound to a set of DOM inputs.
#[wasm_bindgen]
pub struct PlateBindings {
    controller: PlateController<JsField>,
}

#[wasm_bindgen]
impl PlateBindings {
    /// Binds every element of `elements` that carries the marker class.
    #[wasm_bindgen(constructor)]
    pub fn new(elements: Array) -> PlateBindings {
        let mut controller = PlateController::new();
        controller.attach(elements.iter().map(JsField));
        PlateBindings { controller }
    }

    /// Event names to listen for.
    pub fn events() -> Array {
        FieldEvent::ALL
            .iter()
            .map(|e| JsValue::from_str(e.name()))
            .collect()
    }

    /// The bound elements, in binding order.
    pub fn elements(&self) -> Array {
        self.controller.iter().map(|(_, f)| f.0.clone()).collect()
    }

    /// Number of bound elements.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.controller.len()
    }

    /// Formats the element at `index`. Returns true if it was written.
    pub fn handle(&mut self, index: usize, event: &str) -> Result<bool, JsValue> {
        let event = parse_event(event)?;
        self.controller
            .handle(FieldId::new(index), event)
            .map(|outcome| outcome.is_changed())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Formats every bound element. Returns how many were written.
    pub fn handle_all(&mut self, event: &str) -> Result<usize, JsValue> {
        let event = parse_event(event)?;
        Ok(self
            .controller
            .handle_all(event)
            .iter()
            .filter(|(_, outcome)| outcome.is_changed())
            .count())
    }
}
