// File: src/form.rs
// Purpose: Contact form orchestration (blur checks, submission, banner timer)

use folio_validation::{ContactSubmission, Field, Rejection, ValidationResult};
use tracing::{debug, info, trace};

use crate::config::FormSettings;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::sink::{SubmissionSink, TracingSink};
use crate::view::FormView;

/// Result of one submission attempt. Either way the form is back in the
/// editing state when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the record was logged and the form reset
    Accepted(ContactSubmission),
    /// At least one field failed; errors are on display
    Rejected(Rejection),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// The contact form.
///
/// Every widget, the timer facility and the log sink are injected, so the
/// same orchestration runs against the browser DOM or the in-memory
/// [`headless`](crate::headless) host.
pub struct ContactForm<V, S, K = TracingSink> {
    view: V,
    scheduler: S,
    sink: K,
    settings: FormSettings,
    pending_hide: Option<TimerHandle>,
}

impl<V, S, K> ContactForm<V, S, K>
where
    V: FormView,
    S: Scheduler,
    K: SubmissionSink,
{
    pub fn new(view: V, scheduler: S, sink: K, settings: FormSettings) -> Self {
        Self {
            view,
            scheduler,
            sink,
            settings,
            pending_hide: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// For hosts that feed user input into the view
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub(crate) fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Handle of the banner hide that has not fired yet, if any
    pub fn pending_hide(&self) -> Option<TimerHandle> {
        self.pending_hide
    }

    /// A field lost focus: check that field alone and update its error
    pub fn blur(&mut self, field: Field) -> ValidationResult {
        let result = field.check(&self.view.value(field));
        self.view.present(&result);
        debug!(%field, valid = result.is_valid(), "Field checked on blur");
        result
    }

    /// Check every field and either show errors or accept the submission
    pub fn submit(&mut self) -> SubmitOutcome {
        let values = self.view.values();

        for result in values.check_all() {
            self.view.present(&result);
        }

        match ContactSubmission::try_from(&values) {
            Ok(submission) => {
                self.accept(&submission);
                SubmitOutcome::Accepted(submission)
            }
            Err(rejection) => {
                debug!(violations = ?rejection.violations(), "Submission rejected");
                SubmitOutcome::Rejected(rejection)
            }
        }
    }

    fn accept(&mut self, submission: &ContactSubmission) {
        let message = self.settings.success_message(submission.name());
        self.view.show_success(&message);
        self.view.reset();

        // A newer confirmation gets the full delay
        if let Some(previous) = self.pending_hide.take() {
            trace!(timer = previous.id(), "Cancelling earlier banner hide");
            self.scheduler.cancel(previous);
        }
        let handle = self.scheduler.schedule(self.settings.success_hide_delay());
        self.pending_hide = Some(handle);

        info!(timer = handle.id(), "Contact form accepted");
        self.sink.record(submission);
    }

    /// A scheduled delay elapsed. Returns whether the banner was hidden;
    /// handles other than the pending one are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.pending_hide != Some(handle) {
            trace!(timer = handle.id(), "Ignoring stale timer");
            return false;
        }

        self.pending_hide = None;
        self.scheduler.cancel(handle);
        self.view.hide_success();
        true
    }
}
