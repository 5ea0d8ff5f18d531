//! In-memory host for the contact form.
//!
//! Runs [`ContactForm`] without a browser: field text lives in a
//! [`FieldValues`], time only moves when [`ManualScheduler::advance`] is
//! called, and submissions are collected in a [`MemorySink`].

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use folio_validation::{ContactSubmission, Field, FieldValues};

use crate::form::ContactForm;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::sink::SubmissionSink;
use crate::view::FormView;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    values: FieldValues,
    errored: BTreeSet<Field>,
    error_text: BTreeMap<Field, String>,
    banner_text: String,
    banner_visible: bool,
    banner_success: bool,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: FieldValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Simulate typing into a field
    pub fn set_value(&mut self, field: Field, text: impl Into<String>) {
        self.values.set(field, text);
    }

    /// Message shown for a field, if its container is marked errored
    pub fn error(&self, field: Field) -> Option<&str> {
        if self.errored.contains(&field) {
            self.error_text.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errored.contains(&field)
    }

    /// Banner text while it is visible
    pub fn banner(&self) -> Option<&str> {
        self.banner_visible.then_some(self.banner_text.as_str())
    }

    /// Whether the banner carries the success style (kept after hiding)
    pub fn banner_is_success(&self) -> bool {
        self.banner_success
    }
}

impl FormView for MemoryView {
    fn value(&self, field: Field) -> String {
        self.values.get(field).to_string()
    }

    fn show_error(&mut self, field: Field, message: &str) {
        self.errored.insert(field);
        self.error_text.insert(field, message.to_string());
    }

    fn clear_error(&mut self, field: Field) {
        self.errored.remove(&field);
        self.error_text.remove(&field);
    }

    fn show_success(&mut self, message: &str) {
        self.banner_text = message.to_string();
        self.banner_visible = true;
        self.banner_success = true;
    }

    fn hide_success(&mut self) {
        self.banner_visible = false;
    }

    fn reset(&mut self) {
        self.values = FieldValues::default();
    }
}

/// Virtual clock; nothing fires until `advance` is called
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerHandle, Duration>,
    cancelled: Vec<TimerHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadline of a callback that has not fired or been cancelled
    pub fn due_at(&self, handle: TimerHandle) -> Option<Duration> {
        self.pending.get(&handle).copied()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Handles cancelled while still pending, in cancellation order
    pub fn cancelled(&self) -> &[TimerHandle] {
        &self.cancelled
    }

    /// Move the clock forward and return the handles that came due, earliest
    /// first
    pub fn advance(&mut self, by: Duration) -> Vec<TimerHandle> {
        self.now += by;
        let mut due: Vec<(Duration, TimerHandle)> = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= self.now)
            .map(|(handle, at)| (*at, *handle))
            .collect();
        due.sort();

        for (_, handle) in &due {
            self.pending.remove(handle);
        }
        due.into_iter().map(|(_, handle)| handle).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        self.pending.insert(handle, self.now + delay);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.pending.remove(&handle).is_some() {
            self.cancelled.push(handle);
        }
    }
}

/// Keeps every accepted submission
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<ContactSubmission>,
}

impl MemorySink {
    pub fn records(&self) -> &[ContactSubmission] {
        &self.records
    }
}

impl SubmissionSink for MemorySink {
    fn record(&mut self, submission: &ContactSubmission) {
        self.records.push(submission.clone());
    }
}

impl<V, K> ContactForm<V, ManualScheduler, K>
where
    V: FormView,
    K: SubmissionSink,
{
    /// Advance the virtual clock and deliver every timer that came due.
    /// Returns how many of them hid the banner.
    pub fn advance(&mut self, by: Duration) -> usize {
        let due = self.scheduler_mut().advance(by);
        due.into_iter().filter(|handle| self.on_timer(*handle)).count()
    }
}
