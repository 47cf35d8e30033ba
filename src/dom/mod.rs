//! The slice of the DOM the page behaviors touch
//!
//! The copy and sizing logic is written against these traits so it runs the same
//! over real `web_sys` elements in the browser and over `fake` in unit tests.

use crate::errors::PromoResult;
use crate::utils::clipboard::ClipboardWriter;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub mod fake;

/// Rendered size of an element's border box, in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whole-pixel CSS lengths; fractional sizes render blurry
    pub fn rounded_px(&self) -> (String, String) {
        (px(self.width), px(self.height))
    }
}

fn px(value: f64) -> String {
    format!("{}px", value.round() as i64)
}

pub trait PageElement: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn put_attribute(&self, name: &str, value: &str);
    fn drop_attribute(&self, name: &str);

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Immediately preceding element sibling
    fn previous_element(&self) -> Option<Self>;
    /// First descendant matching `selector`
    fn find(&self, selector: &str) -> Option<Self>;

    /// Identity comparison (same node, not equal content)
    fn same_node(&self, other: &Self) -> bool;
    /// Removes the element from its parent
    fn detach(&self);

    fn rendered_size(&self) -> BoxSize;
    /// Inline style property
    fn set_style(&self, property: &str, value: &str);
    fn clear_style(&self, property: &str);
    /// Resolved style property; `None` when unavailable or empty
    fn computed_style(&self, property: &str) -> Option<String>;
}

pub trait Page {
    type Element: PageElement;

    fn viewport_width(&self) -> f64;
    fn select_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Resolved custom property on the root element; `None` when unset
    fn root_property(&self, name: &str) -> Option<String>;

    /// Async Clipboard API writer, when the page exposes one
    fn async_clipboard(&self) -> Option<Rc<dyn ClipboardWriter>>;
    /// Appends an off-screen, read-only textarea holding `text` to the body and
    /// selects its contents
    fn append_hidden_textarea(&self, text: &str) -> PromoResult<Self::Element>;
    /// `document.execCommand("copy")` on the current selection
    fn exec_copy(&self) -> PromoResult<bool>;
}
