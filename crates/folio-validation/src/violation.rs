//! Field violation taxonomy

use serde::Serialize;
use thiserror::Error;

use crate::field::Field;

/// The rule a field broke. The `Display` text is the message shown next to
/// the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldViolation {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldViolation {
    /// The field this rule belongs to
    pub fn field(self) -> Field {
        match self {
            FieldViolation::NameTooShort => Field::Name,
            FieldViolation::InvalidEmail => Field::Email,
            FieldViolation::MessageTooShort => Field::Message,
        }
    }
}
