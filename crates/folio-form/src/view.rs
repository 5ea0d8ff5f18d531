// File: src/view.rs
// Purpose: The UI surface the contact form reads from and writes to

use folio_validation::{Field, FieldValues, ValidationResult};

/// Handles onto the form widgets, injected into `ContactForm`.
///
/// Implementations must make `show_error` and `clear_error` idempotent:
/// repeating a call with the same arguments leaves the UI as the first call
/// did.
pub trait FormView {
    /// Current raw text of a field
    fn value(&self, field: Field) -> String;

    /// Mark the field's container as errored and show `message` in its slot
    fn show_error(&mut self, field: Field, message: &str);

    /// Unmark the field's container and empty its slot
    fn clear_error(&mut self, field: Field);

    /// Show the confirmation banner with `message`
    fn show_success(&mut self, message: &str);

    fn hide_success(&mut self);

    /// Empty every field
    fn reset(&mut self);

    fn values(&self) -> FieldValues {
        FieldValues::new(
            self.value(Field::Name),
            self.value(Field::Email),
            self.value(Field::Message),
        )
    }

    /// Make the field's error display match `result`
    fn present(&mut self, result: &ValidationResult) {
        match result.violation {
            Some(violation) => self.show_error(result.field, &violation.to_string()),
            None => self.clear_error(result.field),
        }
    }
}
