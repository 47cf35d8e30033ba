//! Copy-to-clipboard buttons
//!
//! A copy button either names its code directly (`data-code="PROMO10"`) or sits
//! right after the promo box showing the code. Clicking copies the code and
//! flashes a short confirmation on the button.

use crate::config::PromoConfig;
use crate::dom::PageElement;
use crate::errors::PromoError;
use crate::stores::feedback::FeedbackTimers;
use crate::utils::clipboard::ClipboardWriter;
use crate::utils::timer::Scheduler;
use std::rc::Rc;

/// Text a copy button should put on the clipboard, if any
///
/// An explicit non-empty code attribute wins. Otherwise the preceding element
/// sibling is used when it is a promo box, with surrounding whitespace trimmed.
pub fn resolve_copy_text<E: PageElement>(trigger: &E, config: &PromoConfig) -> Option<String> {
    if let Some(code) = trigger.attribute(&config.code_attribute) {
        if !code.is_empty() {
            return Some(code);
        }
    }

    let sibling = trigger.previous_element()?;
    if !sibling.has_class(&config.promo_box_class) {
        return None;
    }

    let text = sibling.text().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[derive(Debug, PartialEq)]
pub enum CopyOutcome {
    /// Nothing to copy; the button was left alone
    Skipped,
    Copied(String),
    Failed(PromoError),
}

pub struct CopyButtons<E: PageElement, S: Scheduler> {
    config: Rc<PromoConfig>,
    writer: Rc<dyn ClipboardWriter>,
    feedback: FeedbackTimers<E, S>,
}

impl<E: PageElement, S: Scheduler> Clone for CopyButtons<E, S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            writer: self.writer.clone(),
            feedback: self.feedback.clone(),
        }
    }
}

impl<E: PageElement, S: Scheduler> CopyButtons<E, S> {
    pub fn new(config: Rc<PromoConfig>, writer: Rc<dyn ClipboardWriter>, scheduler: S) -> Self {
        let feedback = FeedbackTimers::new(
            scheduler,
            config.copied_class.clone(),
            config.revert_label.clone(),
        );
        Self {
            config,
            writer,
            feedback,
        }
    }

    pub fn feedback(&self) -> &FeedbackTimers<E, S> {
        &self.feedback
    }

    /// Copies the button's code and shows the matching feedback
    ///
    /// Failures end up on the button label, never in the caller.
    pub async fn copy_from(&self, trigger: &E) -> CopyOutcome {
        let text = match resolve_copy_text(trigger, &self.config) {
            Some(text) => text,
            None => {
                log::debug!("Copy button has no code to copy");
                return CopyOutcome::Skipped;
            }
        };

        match self.writer.write_text(&text).await {
            Ok(()) => {
                log::debug!("Copied promo code via {}", self.writer.name());
                self.feedback.show(trigger, &self.config.success);
                CopyOutcome::Copied(text)
            }
            Err(e) => {
                log::warn!("Copy via {} failed: {}", self.writer.name(), e);
                self.feedback.show(trigger, &self.config.failure);
                CopyOutcome::Failed(e)
            }
        }
    }
}
