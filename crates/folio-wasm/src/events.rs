// File: src/events.rs
// Purpose: DOM helpers shared by the form and page bindings

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

use crate::error::BindError;

/// Attach `handler` for the lifetime of the page
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| BindError::js("addEventListener", err))?;
    closure.forget();
    Ok(())
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement(id.to_string()))
}

pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<Element>, BindError> {
    document
        .query_selector(selector)
        .map_err(|err| BindError::js("querySelector", err))
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BindError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| BindError::js("querySelectorAll", err))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Add or remove `class` so that its presence equals `on`
pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        tracing::warn!("Failed to update class {:?}: {:?}", class, err);
    }
}

pub(crate) fn toggle_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().toggle(class) {
        tracing::warn!("Failed to toggle class {:?}: {:?}", class, err);
    }
}
