//! Folio Validation
//!
//! Field rules for the portfolio contact form. The predicates are pure and
//! are shared by the form orchestrator (`folio-form`) and the browser
//! bindings (`folio-wasm`), so client-side checks and headless tests run the
//! same logic.
//!
//! ```
//! use folio_validation::{validate_email, Field};
//!
//! assert!(validate_email("jane@example.com"));
//! assert!(!Field::Name.check("A").is_valid());
//! ```

pub mod field;
pub mod submission;
pub mod validators;
pub mod violation;

pub use field::{Field, UnknownField, ValidationResult};
pub use submission::{ContactSubmission, FieldValues, Rejection};
pub use validators::{
    validate_email, validate_message, validate_name, MESSAGE_MIN_CHARS, NAME_MIN_CHARS,
};
pub use violation::FieldViolation;
