//! Deferred callbacks
//!
//! `Scheduler` hides the timer primitive. Handles cancel their callback when
//! dropped, so "replace the stored handle" is all it takes to reschedule.

use std::cell::RefCell;
use std::rc::Rc;

pub type Task = Box<dyn FnOnce() + 'static>;

pub trait Scheduler: Clone + 'static {
    /// Cancels the pending callback when dropped
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

/// `setTimeout` through `gloo_timers`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

/// Coalesces bursts of calls into one run after `delay_ms` of quiet
///
/// The handle of a timer that already fired stays in the slot until the next
/// `call`, so a callback never drops its own timer.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler> Clone for Debouncer<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            delay_ms: self.delay_ms,
            pending: self.pending.clone(),
        }
    }
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(f));
        // Replacing the previous handle cancels it
        let previous = self.pending.borrow_mut().replace(handle);
        drop(previous);
    }

    /// Drops any pending run
    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}
