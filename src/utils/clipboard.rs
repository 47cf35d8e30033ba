//! Clipboard writers
//!
//! Two ways of getting text onto the clipboard: the async Clipboard API where
//! the browser exposes it, and the `execCommand("copy")` trick on a hidden
//! textarea for older browsers. Which one to use is decided once, when the
//! writer is built.

use crate::dom::{Page, PageElement};
use crate::errors::{PromoError, PromoResult};
use async_trait::async_trait;
use std::rc::Rc;

#[async_trait(?Send)]
pub trait ClipboardWriter {
    /// Short name for logs
    fn name(&self) -> &'static str;

    async fn write_text(&self, text: &str) -> PromoResult<()>;
}

/// Hidden textarea + `document.execCommand("copy")`
pub struct LegacyClipboard<P: Page> {
    page: P,
}

/// Detaches the element when dropped
struct Detached<E: PageElement>(E);

impl<E: PageElement> Drop for Detached<E> {
    fn drop(&mut self) {
        self.0.detach();
    }
}

impl<P: Page> LegacyClipboard<P> {
    pub fn new(page: P) -> Self {
        Self { page }
    }

    fn copy(&self, text: &str) -> PromoResult<()> {
        let _textarea = Detached(self.page.append_hidden_textarea(text)?);

        if self.page.exec_copy()? {
            Ok(())
        } else {
            Err(PromoError::CopyCommandFailed)
        }
    }
}

#[async_trait(?Send)]
impl<P: Page + 'static> ClipboardWriter for LegacyClipboard<P> {
    fn name(&self) -> &'static str {
        "exec-command"
    }

    async fn write_text(&self, text: &str) -> PromoResult<()> {
        self.copy(text)
    }
}

/// Picks the async Clipboard API when available, the legacy path otherwise
pub fn select_writer<P: Page + Clone + 'static>(page: &P) -> Rc<dyn ClipboardWriter> {
    match page.async_clipboard() {
        Some(clipboard) => clipboard,
        None => {
            log::info!("Clipboard API unavailable, using execCommand fallback");
            Rc::new(LegacyClipboard::new(page.clone()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AsyncClipboard;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::ClipboardWriter;
    use crate::errors::{PromoError, PromoResult};
    use async_trait::async_trait;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Clipboard, Navigator};

    /// `navigator.clipboard.writeText`
    pub struct AsyncClipboard {
        clipboard: Clipboard,
    }

    impl AsyncClipboard {
        /// `None` when the page has no usable Clipboard API (insecure context,
        /// old browser)
        pub fn detect(navigator: &Navigator) -> Option<Self> {
            let clipboard = js_sys::Reflect::get(navigator, &JsValue::from_str("clipboard")).ok()?;
            if clipboard.is_undefined() || clipboard.is_null() {
                return None;
            }

            let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText")).ok()?;
            if !write_text.is_function() {
                return None;
            }

            Some(Self {
                clipboard: clipboard.unchecked_into::<Clipboard>(),
            })
        }
    }

    #[async_trait(?Send)]
    impl ClipboardWriter for AsyncClipboard {
        fn name(&self) -> &'static str {
            "clipboard-api"
        }

        async fn write_text(&self, text: &str) -> PromoResult<()> {
            wasm_bindgen_futures::JsFuture::from(self.clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(PromoError::clipboard_rejected)
        }
    }
}
