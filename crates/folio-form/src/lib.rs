//! Folio Form
//!
//! Orchestration of the portfolio contact form. Field rules come from
//! `folio-validation`; this crate decides when they run and what the user
//! sees:
//!
//! - a field losing focus re-checks that field only
//! - submitting re-checks every field, shows or clears each error, and on
//!   success shows a confirmation banner, resets the form and logs the record
//! - the banner hides itself after a configurable delay; a newer confirmation
//!   cancels the pending hide of an older one
//!
//! The UI, the timer facility and the log sink are traits, implemented by the
//! browser bindings in `folio-wasm` and by the in-memory [`headless`] host.

pub mod config;
pub mod form;
pub mod headless;
pub mod scheduler;
pub mod sink;
pub mod view;

pub use config::{FolioConfig, FormSettings, LoggingConfig, PageConfig};
pub use form::{ContactForm, SubmitOutcome};
pub use scheduler::{Scheduler, TimerHandle};
pub use sink::{SubmissionSink, TracingSink};
pub use view::FormView;

pub use folio_validation as validation;
