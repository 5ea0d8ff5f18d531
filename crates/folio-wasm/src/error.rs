// File: src/error.rs
// Purpose: Failures while wiring Rust handlers into the page

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("missing element #{0}")]
    MissingElement(String),

    #[error("element #{id} is not {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BindError {
    pub(crate) fn js(context: &'static str, err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        BindError::Js { context, message }
    }
}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_element() {
        assert_eq!(
            BindError::MissingElement("contactForm".to_string()).to_string(),
            "missing element #contactForm"
        );
        assert_eq!(
            BindError::WrongElement {
                id: "message".to_string(),
                expected: "an <input> or <textarea>",
            }
            .to_string(),
            "element #message is not an <input> or <textarea>"
        );
    }
}
