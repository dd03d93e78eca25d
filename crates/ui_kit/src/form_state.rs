//! Request-scoped form state consumed by [`crate::FormField`].
//!
//! Pages build a [`FormState`] from the submitted values and validation
//! outcome of the current request and hand it to the form primitives;
//! the primitives only ever read it.

use std::collections::HashMap;

/// Field values, per-field error messages and submission status for one
/// rendering of a form.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
    form_error: Option<String>,
    is_submitting: bool,
}

impl FormState {
    /// Empty form state: no values, no errors, not submitting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current value of a named field.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Sets the validation error message of a named field.
    pub fn with_error(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.insert(name.into(), message.into());
        self
    }

    /// Sets a form-level error message not tied to a single field.
    pub fn with_form_error(mut self, message: impl Into<String>) -> Self {
        self.form_error = Some(message.into());
        self
    }

    /// Marks the form as currently submitting.
    pub fn submitting(mut self, is_submitting: bool) -> Self {
        self.is_submitting = is_submitting;
        self
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Form-level error message, if any.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Snapshot of one named field: value, error and name.
    pub fn field(&self, name: &str) -> FieldState {
        FieldState {
            name: name.to_owned(),
            value: self.values.get(name).cloned().unwrap_or_default(),
            error: self.errors.get(name).cloned(),
        }
    }
}

/// One field's slice of a [`FormState`].
#[derive(Clone, Debug)]
pub struct FieldState {
    /// Field name as submitted in form data.
    pub name: String,
    /// Current value, empty when the field was never set.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::FormState;

    #[test]
    fn field_snapshot_reads_value_and_error() {
        let state = FormState::new()
            .with_value("email", "a@b.com")
            .with_error("email", "Email inválido");

        let field = state.field("email");
        assert_eq!(field.name, "email");
        assert_eq!(field.value, "a@b.com");
        assert_eq!(field.error.as_deref(), Some("Email inválido"));
    }

    #[test]
    fn unknown_field_is_empty_and_clean() {
        let field = FormState::new().field("password");
        assert_eq!(field.value, "");
        assert!(field.error.is_none());
    }
}
