//! Scoped ownership of pending timers.
//!
//! Every animated component holds at most one outstanding timer. A
//! [`TimerSlot`] owns that handle: scheduling a replacement cancels the
//! previous one, clearing cancels it, and dropping the slot cancels it.

/// A pending timer (or the task driving it) that can be stopped.
pub trait Cancel {
    /// Stop the timer. Must be safe to call on an already finished timer.
    fn cancel(self);
}

impl Cancel for tokio::task::AbortHandle {
    fn cancel(self) {
        self.abort();
    }
}

impl<T> Cancel for tokio::task::JoinHandle<T> {
    fn cancel(self) {
        self.abort();
    }
}

/// Owner of at most one pending timer handle.
#[derive(Debug)]
pub struct TimerSlot<H: Cancel> {
    pending: Option<H>,
    label: &'static str,
}

impl<H: Cancel> TimerSlot<H> {
    /// Create an empty slot. `label` identifies the owner in logs.
    pub fn new(label: &'static str) -> Self {
        Self {
            pending: None,
            label,
        }
    }

    /// Install `handle`, cancelling whatever was pending before it.
    pub fn replace(&mut self, handle: H) {
        if let Some(previous) = self.pending.replace(handle) {
            tracing::trace!(owner = self.label, "cancelling replaced timer");
            previous.cancel();
        }
    }

    /// Cancel the pending timer, if any.
    pub fn clear(&mut self) {
        if let Some(previous) = self.pending.take() {
            tracing::trace!(owner = self.label, "cancelling timer");
            previous.cancel();
        }
    }

    /// Forget the pending handle without cancelling it.
    ///
    /// Used when the timer has run to completion on its own.
    pub fn release(&mut self) -> Option<H> {
        self.pending.take()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: Cancel> Drop for TimerSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}
