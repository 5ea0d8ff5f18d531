// File: src/scheduler.rs
// Purpose: Deferred callbacks with cancellable handles

use std::time::Duration;

/// Identifies one scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Deferred-callback facility of the host.
///
/// When a scheduled delay elapses the host calls
/// [`ContactForm::on_timer`](crate::ContactForm::on_timer) with the handle
/// returned here.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a pending callback and release any bookkeeping for it.
    ///
    /// Also called with handles that already fired; those must be a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}
