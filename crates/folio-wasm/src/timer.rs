// File: src/timer.rs
// Purpose: Scheduler backed by window.setTimeout

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;
use std::time::Duration;

use folio_form::{Scheduler, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::contact::DomForm;

/// Delivers elapsed timers back to the form it belongs to
pub struct DomScheduler {
    window: Window,
    form: Weak<RefCell<DomForm>>,
    next_id: u64,
    // our handle -> browser timeout id
    timeouts: HashMap<TimerHandle, i32>,
}

impl DomScheduler {
    pub fn new(window: Window, form: Weak<RefCell<DomForm>>) -> Self {
        Self {
            window,
            form,
            next_id: 0,
            timeouts: HashMap::new(),
        }
    }
}

impl Scheduler for DomScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);

        let form = self.form.clone();
        let callback = Closure::once_into_js(move || {
            if let Some(form) = form.upgrade() {
                form.borrow_mut().on_timer(handle);
            }
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            Ok(id) => {
                self.timeouts.insert(handle, id);
            }
            Err(err) => tracing::error!("setTimeout failed for timer {}: {:?}", handle.id(), err),
        }

        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(id) = self.timeouts.remove(&handle) {
            // No-op in the browser when the timeout already ran
            self.window.clear_timeout_with_handle(id);
        }
    }
}
