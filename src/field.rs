//! Binding the formatter to input fields.
//!
//! A [`PlateController`] is created once at setup and holds every bound
//! field. Events are dispatched by [`FieldId`], so each invocation touches
//! only its own field and nothing is shared between invocations.
//!
//! # Example
//!
//! ```
//! use plate_formatter::field::{FieldEvent, MemoryField, PlateController};
//! use plate_formatter::Reformat;
//!
//! let mut controller = PlateController::new();
//! let id = controller.bind(MemoryField::new("ab12cd"));
//!
//! let outcome = controller.handle(id, FieldEvent::KeyUp).unwrap();
//! assert_eq!(outcome, Reformat::Rewrite("AB-12-CD".into()));
//! assert_eq!(controller.field(id).unwrap().value(), Some("AB-12-CD"));
//!
//! // Second keystroke on the same value writes nothing
//! let outcome = controller.handle(id, FieldEvent::KeyUp).unwrap();
//! assert_eq!(outcome, Reformat::Unchanged);
//! assert_eq!(controller.field(id).unwrap().write_count(), 1);
//! ```

use crate::error::FieldError;
use crate::format::{reformat, Reformat};
use std::fmt;

/// CSS class marking the inputs the formatter attaches to.
pub const MARKER_CLASS: &str = "licence-plate-input";

/// A text field the formatter can read and overwrite.
pub trait PlateInput {
    /// The field's current value, or `None` if it has none.
    fn value(&self) -> Option<String>;

    /// Overwrites the displayed value.
    fn set_value(&mut self, value: &str);

    /// Whether the field carries the given class.
    fn has_class(&self, _class: &str) -> bool {
        false
    }
}

impl<T: PlateInput + ?Sized> PlateInput for Box<T> {
    fn value(&self) -> Option<String> {
        (**self).value()
    }

    fn set_value(&mut self, value: &str) {
        (**self).set_value(value)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

/// Events that trigger formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEvent {
    /// The value was committed.
    Change,
    /// A key was released.
    KeyUp,
}

impl FieldEvent {
    /// Every event the formatter listens for.
    pub const ALL: [FieldEvent; 2] = [FieldEvent::Change, FieldEvent::KeyUp];

    /// The DOM event name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::KeyUp => "keyup",
        }
    }

    /// Parses a DOM event name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "change" => Some(Self::Change),
            "keyup" => Some(Self::KeyUp),
            _ => None,
        }
    }
}

impl fmt::Display for FieldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle for a field bound to a [`PlateController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(usize);

impl FieldId {
    /// Creates an id from a raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field #{}", self.0)
    }
}

/// Holds the bound fields and formats them on events.
#[derive(Debug)]
pub struct PlateController<F> {
    fields: Vec<F>,
}

impl<F> Default for PlateController<F> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<F: PlateInput> PlateController<F> {
    /// Creates a controller with no fields.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a field unconditionally.
    pub fn bind(&mut self, field: F) -> FieldId {
        let id = FieldId(self.fields.len());
        self.fields.push(field);
        id
    }

    /// Binds every field carrying [`MARKER_CLASS`] and drops the rest.
    ///
    /// Returns the ids of the bound fields in input order.
    pub fn attach<I>(&mut self, fields: I) -> Vec<FieldId>
    where
        I: IntoIterator<Item = F>,
    {
        fields
            .into_iter()
            .filter(|field| field.has_class(MARKER_CLASS))
            .map(|field| self.bind(field))
            .collect()
    }

    /// Formats one field in response to an event.
    ///
    /// The field is written only when the formatted value differs from what
    /// it currently holds. A field with no value is left alone.
    pub fn handle(&mut self, id: FieldId, event: FieldEvent) -> Result<Reformat, FieldError> {
        let bound = self.fields.len();
        let field = self
            .fields
            .get_mut(id.0)
            .ok_or(FieldError::UnknownField { id, bound })?;

        let Some(raw) = field.value() else {
            #[cfg(feature = "tracing")]
            tracing::trace!(%id, %event, "field has no value");
            return Ok(Reformat::Unchanged);
        };

        let outcome = reformat(&raw);
        if let Reformat::Rewrite(value) = &outcome {
            #[cfg(feature = "tracing")]
            tracing::debug!(%id, %event, from = %raw, to = %value, "rewriting field");
            field.set_value(value);
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(%id, %event, "field already formatted");
        }

        #[cfg(not(feature = "tracing"))]
        let _ = event;

        Ok(outcome)
    }

    /// Runs [`handle`](Self::handle) on every bound field.
    pub fn handle_all(&mut self, event: FieldEvent) -> Vec<(FieldId, Reformat)> {
        (0..self.fields.len())
            .map(FieldId)
            .filter_map(|id| self.handle(id, event).ok().map(|outcome| (id, outcome)))
            .collect()
    }

    /// Returns the field bound as `id`.
    #[inline]
    pub fn field(&self, id: FieldId) -> Option<&F> {
        self.fields.get(id.0)
    }

    /// Returns the field bound as `id`, mutably.
    #[inline]
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut F> {
        self.fields.get_mut(id.0)
    }

    /// Number of bound fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is bound.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over bound fields with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &F)> {
        self.fields.iter().enumerate().map(|(i, f)| (FieldId(i), f))
    }

    /// Consumes the controller and returns the fields.
    #[inline]
    pub fn into_fields(self) -> Vec<F> {
        self.fields
    }
}

/// In-memory field that records every write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    value: Option<String>,
    classes: Vec<String>,
    writes: Vec<String>,
}

impl MemoryField {
    /// Creates a field holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Creates a field with no value.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Creates a field holding `value` and carrying [`MARKER_CLASS`].
    pub fn marked(value: impl Into<String>) -> Self {
        Self::new(value).with_class(MARKER_CLASS)
    }

    /// Adds a class to the field.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// The current value.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Simulates the user typing a new value. Not recorded as a write.
    pub fn type_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Every value written through [`PlateInput::set_value`], oldest first.
    #[inline]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Number of writes.
    #[inline]
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl PlateInput for MemoryField {
    fn value(&self) -> Option<String> {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = Some(value.to_owned());
        self.writes.push(value.to_owned());
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
