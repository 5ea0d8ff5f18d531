// File: src/submission.rs
// Purpose: Raw form snapshot and the record built from a fully valid form

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::{Field, ValidationResult};
use crate::violation::FieldViolation;

/// Raw, untrimmed text of every field as the user left it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Check every field, in `Field::ALL` order
    pub fn check_all(&self) -> [ValidationResult; 3] {
        Field::ALL.map(|field| field.check(self.get(field)))
    }
}

/// A submission whose fields all passed validation.
///
/// Can only be obtained through `TryFrom<&FieldValues>`, so holding one
/// proves every rule held at construction time. Values are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<&FieldValues> for ContactSubmission {
    type Error = Rejection;

    fn try_from(values: &FieldValues) -> Result<Self, Self::Error> {
        let violations: Vec<FieldViolation> = values
            .check_all()
            .iter()
            .filter_map(|result| result.violation)
            .collect();

        if !violations.is_empty() {
            return Err(Rejection { violations });
        }

        Ok(Self {
            name: values.name.trim().to_string(),
            email: values.email.trim().to_string(),
            message: values.message.trim().to_string(),
        })
    }
}

/// Returned when at least one field failed; violations are in field order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.violations))]
pub struct Rejection {
    violations: Vec<FieldViolation>,
}

impl Rejection {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn failed(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field() == field)
    }
}

fn join_messages(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_values_build_trimmed_record() {
        let values = FieldValues::new(
            "  Jane Doe ",
            " jane@example.com",
            "Hello, I would like to connect.  ",
        );
        let submission = ContactSubmission::try_from(&values).unwrap();
        assert_eq!(submission.name(), "Jane Doe");
        assert_eq!(submission.email(), "jane@example.com");
        assert_eq!(submission.message(), "Hello, I would like to connect.");
    }

    #[test]
    fn test_any_failure_prevents_record() {
        let values = FieldValues::new("A", "a@b.com", "short");
        let rejection = ContactSubmission::try_from(&values).unwrap_err();
        assert_eq!(
            rejection.violations(),
            &[FieldViolation::NameTooShort, FieldViolation::MessageTooShort]
        );
        assert!(rejection.failed(Field::Name));
        assert!(!rejection.failed(Field::Email));
        assert_eq!(
            rejection.to_string(),
            "Name must be at least 2 characters; Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let rejection = ContactSubmission::try_from(&FieldValues::default()).unwrap_err();
        assert_eq!(rejection.violations().len(), 3);
    }

    #[test]
    fn test_set_and_get() {
        let mut values = FieldValues::default();
        values.set(Field::Email, "jane@example.com");
        assert_eq!(values.get(Field::Email), "jane@example.com");
        assert_eq!(values.get(Field::Name), "");
    }

    #[test]
    fn test_record_serializes_as_plain_object() {
        let values = FieldValues::new("Jane", "jane@example.com", "Hello there, friend");
        let submission = ContactSubmission::try_from(&values).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane",
                "email": "jane@example.com",
                "message": "Hello there, friend",
            })
        );
    }
}
