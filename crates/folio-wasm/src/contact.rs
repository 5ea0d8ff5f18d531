// File: src/contact.rs
// Purpose: Mount the contact form on the page

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_form::{ContactForm, FormSettings, TracingSink};
use folio_validation::Field;
use tracing::info;
use web_sys::{Document, Event, EventTarget, Window};

use crate::dom::DomView;
use crate::error::BindError;
use crate::events::listen;
use crate::timer::DomScheduler;

pub type DomForm = ContactForm<DomView, DomScheduler, TracingSink>;

/// Bind the form markup and attach submit and blur handlers.
///
/// The returned handle is shared with the listeners, which keep the form
/// alive for the rest of the page's lifetime.
pub fn mount(
    window: &Window,
    document: &Document,
    settings: FormSettings,
) -> Result<Rc<RefCell<DomForm>>, BindError> {
    let view = DomView::bind(document)?;

    let form = Rc::new_cyclic(|weak: &Weak<RefCell<DomForm>>| {
        let scheduler = DomScheduler::new(window.clone(), weak.clone());
        RefCell::new(ContactForm::new(view, scheduler, TracingSink, settings))
    });

    let submit_target: EventTarget = form.borrow().view().form_target().clone();
    let on_submit = Rc::clone(&form);
    listen(&submit_target, "submit", move |event: Event| {
        event.prevent_default();
        on_submit.borrow_mut().submit();
    })?;

    for field in Field::ALL {
        let target: EventTarget = form.borrow().view().input_target(field).clone();
        let on_blur = Rc::clone(&form);
        listen(&target, "blur", move |_event: Event| {
            on_blur.borrow_mut().blur(field);
        })?;
    }

    info!("Contact form mounted");
    Ok(form)
}
