//! Timed feedback labels on copy buttons
//!
//! Each button has at most one pending revert. The revert timers are held here,
//! keyed by node identity, rather than stashed on the element itself.
//!
//! DOM elements are neither `Hash` nor `Ord`, and two handles to the same node
//! only compare equal through `same_node`, so the store is a short list scanned
//! with it. It holds one entry per button clicked in the last couple of seconds.

use crate::config::Feedback;
use crate::dom::PageElement;
use crate::utils::timer::Scheduler;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const ARIA_LIVE: &str = "aria-live";
const ARIA_LIVE_POLITE: &str = "polite";

struct PendingRevert<E, H> {
    target: E,
    /// Label the button had before the first overlapping cycle started
    original: String,
    fired: Rc<Cell<bool>>,
    _handle: H,
}

pub struct FeedbackTimers<E: PageElement, S: Scheduler> {
    scheduler: S,
    copied_class: String,
    revert_label: Option<String>,
    pending: Rc<RefCell<Vec<PendingRevert<E, S::Handle>>>>,
}

impl<E: PageElement, S: Scheduler> Clone for FeedbackTimers<E, S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            copied_class: self.copied_class.clone(),
            revert_label: self.revert_label.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<E: PageElement, S: Scheduler> FeedbackTimers<E, S> {
    pub fn new(scheduler: S, copied_class: impl Into<String>, revert_label: Option<String>) -> Self {
        Self {
            scheduler,
            copied_class: copied_class.into(),
            revert_label,
            pending: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shows `feedback` on `target`, replacing any cycle already running on it
    pub fn show(&self, target: &E, feedback: &Feedback) {
        // Dropping a replaced entry cancels its timer. Fired entries are pruned
        // here rather than from inside their own callback.
        let original = {
            let mut pending = self.pending.borrow_mut();
            let mut original = None;
            pending.retain(|entry| {
                if entry.fired.get() {
                    return false;
                }
                if entry.target.same_node(target) {
                    original = Some(entry.original.clone());
                    return false;
                }
                true
            });
            original
        };
        let original = original.unwrap_or_else(|| target.text());

        target.set_text(&feedback.message);
        target.add_class(&self.copied_class);
        target.put_attribute(ARIA_LIVE, ARIA_LIVE_POLITE);

        let fired = Rc::new(Cell::new(false));
        let restore = self.revert_label.clone().unwrap_or_else(|| original.clone());
        let handle = {
            let target = target.clone();
            let fired = fired.clone();
            let copied_class = self.copied_class.clone();
            self.scheduler.schedule(
                feedback.duration_ms,
                Box::new(move || {
                    fired.set(true);
                    target.set_text(&restore);
                    target.remove_class(&copied_class);
                    target.drop_attribute(ARIA_LIVE);
                }),
            )
        };

        self.pending.borrow_mut().push(PendingRevert {
            target: target.clone(),
            original,
            fired,
            _handle: handle,
        });
    }

    /// Number of buttons with a revert still outstanding
    #[cfg(test)]
    pub fn outstanding(&self) -> usize {
        self.pending
            .borrow()
            .iter()
            .filter(|entry| !entry.fired.get())
            .count()
    }

    #[cfg(test)]
    pub fn is_pending(&self, target: &E) -> bool {
        self.pending
            .borrow()
            .iter()
            .any(|entry| !entry.fired.get() && entry.target.same_node(target))
    }

    /// Cancels every pending revert, leaving labels as they are
    pub fn clear(&self) {
        let drained: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        drop(drained);
    }
}
