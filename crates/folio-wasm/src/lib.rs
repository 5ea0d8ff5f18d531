//! Folio WASM
//!
//! WebAssembly bindings for the portfolio site. Mounts the contact form and
//! the page behaviors on the live DOM and exposes the field rules to
//! JavaScript, using the same validation logic as the headless host.
//!
//! ```javascript
//! import init, { mountContactForm, mountPage } from "./pkg/folio_wasm.js";
//!
//! await init();
//! mountPage();
//! mountContactForm(`[form]\nsuccess_hide_ms = 5000`);
//! ```

use folio_form::FolioConfig;
use folio_validation::{Field, FieldValues, UnknownField};
use serde::{Deserialize, Serialize};
use tracing::Level;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub mod contact;
pub mod dom;
pub mod error;
mod events;
pub mod logging;
pub mod page;
pub mod timer;

pub use error::BindError;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

fn browser() -> Result<(Window, Document), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    Ok((window, document))
}

fn load_config(config_toml: Option<String>) -> Result<FolioConfig, BindError> {
    let config = FolioConfig::from_toml_str(config_toml.as_deref().unwrap_or_default())
        .map_err(|e| BindError::Config(format!("{:#}", e)))?;
    logging::install(config.logging.max_level().unwrap_or(Level::INFO));
    Ok(config)
}

/// Bind the contact form (`#contactForm`) and its fields
///
/// # Arguments
/// * `config_toml` - Optional folio.toml contents; defaults apply when omitted
#[wasm_bindgen(js_name = mountContactForm)]
pub fn mount_contact_form(config_toml: Option<String>) -> Result<(), JsValue> {
    let config = load_config(config_toml)?;
    let (window, document) = browser()?;
    contact::mount(&window, &document, config.form)?;
    Ok(())
}

/// Bind menu, scroll, reveal, anchor, skip link and logging behaviors
///
/// # Arguments
/// * `config_toml` - Optional folio.toml contents; the `[page]` table applies
#[wasm_bindgen(js_name = mountPage)]
pub fn mount_page(config_toml: Option<String>) -> Result<(), JsValue> {
    let config = load_config(config_toml)?;
    let (window, document) = browser()?;
    page::mount(&window, &document, &config.page)?;
    Ok(())
}

#[wasm_bindgen(js_name = validateName)]
pub fn validate_name_js(text: &str) -> bool {
    folio_validation::validate_name(text)
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(text: &str) -> bool {
    folio_validation::validate_email(text)
}

#[wasm_bindgen(js_name = validateMessage)]
pub fn validate_message_js(text: &str) -> bool {
    folio_validation::validate_message(text)
}

fn field_message(field: &str, value: &str) -> Result<Option<String>, UnknownField> {
    let field: Field = field.parse()?;
    Ok(field.check(value).message())
}

/// Check one field by name
///
/// # Returns
/// The error message, or `undefined` when the value passes
///
/// # Example (JavaScript)
/// ```javascript
/// validateField('email', 'not-an-email'); // "Please enter a valid email address"
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: &str, value: &str) -> Result<Option<String>, JsValue> {
    field_message(field, value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn form_errors(values: &FieldValues) -> Vec<ValidationError> {
    values
        .check_all()
        .iter()
        .filter_map(|result| {
            result.message().map(|message| ValidationError {
                field: result.field,
                message,
            })
        })
        .collect()
}

/// Check all three fields
///
/// # Returns
/// Array of `{ field, message }` (empty if valid)
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(name: &str, email: &str, message: &str) -> Result<JsValue, JsValue> {
    let errors = form_errors(&FieldValues::new(name, email, message));
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}
