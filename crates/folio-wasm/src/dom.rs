// File: src/dom.rs
// Purpose: FormView backed by the contact form markup

use folio_form::FormView;
use folio_validation::Field;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::error::BindError;
use crate::events::{element_by_id, set_class};

pub const FORM_ID: &str = "contactForm";
pub const BANNER_ID: &str = "formMessage";

const ERROR_CLASS: &str = "error";
const SHOW_CLASS: &str = "show";
const SUCCESS_CLASS: &str = "success";

enum FieldInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldInput {
    fn value(&self) -> String {
        match self {
            FieldInput::Input(el) => el.value(),
            FieldInput::TextArea(el) => el.value(),
        }
    }

    fn element(&self) -> &Element {
        match self {
            FieldInput::Input(el) => el.as_ref(),
            FieldInput::TextArea(el) => el.as_ref(),
        }
    }
}

struct FieldHandles {
    input: FieldInput,
    /// Gets the `error` class; the input's parent element
    container: Option<Element>,
    slot: Element,
}

/// Element handles resolved once when the form is bound
pub struct DomView {
    form: HtmlFormElement,
    name: FieldHandles,
    email: FieldHandles,
    message: FieldHandles,
    banner: Element,
}

impl DomView {
    /// Look up every element the form needs; fails on the first missing one
    pub fn bind(document: &Document) -> Result<Self, BindError> {
        let form = element_by_id(document, FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| BindError::WrongElement {
                id: FORM_ID.to_string(),
                expected: "a <form>",
            })?;

        Ok(Self {
            form,
            name: bind_field(document, Field::Name)?,
            email: bind_field(document, Field::Email)?,
            message: bind_field(document, Field::Message)?,
            banner: element_by_id(document, BANNER_ID)?,
        })
    }

    pub fn form_target(&self) -> &EventTarget {
        self.form.as_ref()
    }

    pub fn input_target(&self, field: Field) -> &EventTarget {
        self.handles(field).input.element().as_ref()
    }

    fn handles(&self, field: Field) -> &FieldHandles {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

fn bind_field(document: &Document, field: Field) -> Result<FieldHandles, BindError> {
    let id = field.input_id();
    let input = match element_by_id(document, id)?.dyn_into::<HtmlInputElement>() {
        Ok(input) => FieldInput::Input(input),
        Err(element) => element
            .dyn_into::<HtmlTextAreaElement>()
            .map(FieldInput::TextArea)
            .map_err(|_| BindError::WrongElement {
                id: id.to_string(),
                expected: "an <input> or <textarea>",
            })?,
    };
    let container = input.element().parent_element();
    let slot = element_by_id(document, field.error_slot_id())?;

    Ok(FieldHandles {
        input,
        container,
        slot,
    })
}

impl FormView for DomView {
    fn value(&self, field: Field) -> String {
        self.handles(field).input.value()
    }

    fn show_error(&mut self, field: Field, message: &str) {
        let handles = self.handles(field);
        if let Some(container) = &handles.container {
            set_class(container, ERROR_CLASS, true);
        }
        handles.slot.set_text_content(Some(message));
        set_class(&handles.slot, SHOW_CLASS, true);
    }

    fn clear_error(&mut self, field: Field) {
        let handles = self.handles(field);
        if let Some(container) = &handles.container {
            set_class(container, ERROR_CLASS, false);
        }
        handles.slot.set_text_content(Some(""));
        set_class(&handles.slot, SHOW_CLASS, false);
    }

    fn show_success(&mut self, message: &str) {
        self.banner.set_text_content(Some(message));
        set_class(&self.banner, SHOW_CLASS, true);
        set_class(&self.banner, SUCCESS_CLASS, true);
    }

    fn hide_success(&mut self) {
        set_class(&self.banner, SHOW_CLASS, false);
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}
