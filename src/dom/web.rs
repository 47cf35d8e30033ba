//! `web_sys` implementations of the DOM traits

use super::{BoxSize, Page, PageElement};
use crate::errors::{PromoError, PromoResult};
use crate::utils::clipboard::{AsyncClipboard, ClipboardWriter};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlElement, HtmlTextAreaElement, Node, Window};

fn as_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl PageElement for HtmlElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn put_attribute(&self, name: &str, value: &str) {
        Element::set_attribute(self, name, value).ok();
    }

    fn drop_attribute(&self, name: &str) {
        Element::remove_attribute(self, name).ok();
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.class_list().add_1(class).ok();
    }

    fn remove_class(&self, class: &str) {
        self.class_list().remove_1(class).ok();
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn previous_element(&self) -> Option<Self> {
        self.previous_element_sibling().and_then(as_html)
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.query_selector(selector).ok().flatten().and_then(as_html)
    }

    fn same_node(&self, other: &Self) -> bool {
        let other: &Node = other;
        self.is_same_node(Some(other))
    }

    fn detach(&self) {
        Element::remove(self);
    }

    fn rendered_size(&self) -> BoxSize {
        let rect = self.get_bounding_client_rect();
        BoxSize::new(rect.width(), rect.height())
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.style().set_property(property, value) {
            log::debug!("Failed to set {} = {}: {:?}", property, value, e);
        }
    }

    fn clear_style(&self, property: &str) {
        self.style().remove_property(property).ok();
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        let window = web_sys::window()?;
        let style = window.get_computed_style(self).ok().flatten()?;
        style.get_property_value(property).ok().and_then(non_empty)
    }
}

/// The live page: `window` plus its `document`
#[derive(Clone)]
pub struct WebPage {
    pub window: Window,
    pub document: Document,
}

impl WebPage {
    pub fn current() -> PromoResult<Self> {
        let window = web_sys::window().ok_or(PromoError::NoWindow)?;
        let document = window.document().ok_or(PromoError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// `true` once `DOMContentLoaded` has already fired
    pub fn is_parsed(&self) -> bool {
        self.document.ready_state() != "loading"
    }
}

impl Page for WebPage {
    type Element = HtmlElement;

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn select_all(&self, selector: &str) -> Vec<HtmlElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("Invalid selector {}: {:?}", selector, e);
                return Vec::new();
            }
        };

        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn root_property(&self, name: &str) -> Option<String> {
        let root = self.document.document_element()?;
        let style = self.window.get_computed_style(&root).ok().flatten()?;
        style.get_property_value(name).ok().and_then(non_empty)
    }

    fn async_clipboard(&self) -> Option<Rc<dyn ClipboardWriter>> {
        let clipboard = AsyncClipboard::detect(&self.window.navigator())?;
        Some(Rc::new(clipboard))
    }

    fn append_hidden_textarea(&self, text: &str) -> PromoResult<HtmlElement> {
        let body = self.document.body().ok_or(PromoError::NoBody)?;

        let textarea = self
            .document
            .create_element("textarea")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| PromoError::Js("textarea is not an HTMLTextAreaElement".into()))?;
        textarea.set_value(text);
        textarea.set_attribute("readonly", "")?;
        textarea.set_attribute("aria-hidden", "true")?;
        let style = textarea.style();
        style.set_property("position", "fixed")?;
        style.set_property("left", "-9999px")?;
        style.set_property("top", "0")?;
        style.set_property("opacity", "0")?;

        body.append_child(&textarea)?;
        textarea.select();
        Ok(textarea.into())
    }

    fn exec_copy(&self) -> PromoResult<bool> {
        let document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| PromoError::Js("document is not an HTMLDocument".into()))?;
        Ok(document.exec_command("copy")?)
    }
}
