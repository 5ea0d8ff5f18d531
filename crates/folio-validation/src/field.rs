// File: src/field.rs
// Purpose: Contact form field identities and per-field validation results

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validators::{validate_email, validate_message, validate_name};
use crate::violation::FieldViolation;

/// One of the three contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields, in the order they are validated and reported
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Id of the input element in the page markup
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Id of the element that displays this field's error message
    pub fn error_slot_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Message => "messageError",
        }
    }

    /// The rule this field is checked against
    pub fn violation(self) -> FieldViolation {
        match self {
            Field::Name => FieldViolation::NameTooShort,
            Field::Email => FieldViolation::InvalidEmail,
            Field::Message => FieldViolation::MessageTooShort,
        }
    }

    pub fn is_valid(self, text: &str) -> bool {
        match self {
            Field::Name => validate_name(text),
            Field::Email => validate_email(text),
            Field::Message => validate_message(text),
        }
    }

    /// Run this field's rule against raw input
    pub fn check(self, text: &str) -> ValidationResult {
        let violation = (!self.is_valid(text)).then(|| self.violation());
        ValidationResult {
            field: self,
            violation,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.input_id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Outcome of checking one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: Field,
    /// `None` when the field passed
    pub violation: Option<FieldViolation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// Human-readable message, present only for failures
    pub fn message(&self) -> Option<String> {
        self.violation.map(|v| v.to_string())
    }
}
