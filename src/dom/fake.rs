//! In-memory DOM used by unit tests
//!
//! Only `.class` selectors are understood. Rendered size is the inline
//! `width`/`height` when set, otherwise the size given at construction, which is
//! enough to observe the size matcher measuring after it writes. `FakePage`
//! clones share their state, so a test can hand one to a writer and inspect it
//! afterwards.

use super::{BoxSize, Page, PageElement};
use crate::errors::PromoResult;
use crate::utils::clipboard::ClipboardWriter;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

#[derive(Default)]
struct FakeNode {
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    text: String,
    styles: HashMap<String, String>,
    computed: HashMap<String, String>,
    intrinsic: BoxSize,
    previous: Option<FakeElement>,
    parent: Option<Weak<RefCell<FakeNode>>>,
    children: Vec<FakeElement>,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<FakeNode>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_size(self, width: f64, height: f64) -> Self {
        self.0.borrow_mut().intrinsic = BoxSize::new(width, height);
        self
    }

    pub fn with_computed(self, property: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .computed
            .insert(property.to_string(), value.to_string());
        self
    }

    /// Appends children in order, linking each to its preceding sibling
    pub fn with_children(self, children: Vec<FakeElement>) -> Self {
        for child in children {
            self.append(child);
        }
        self
    }

    pub fn append(&self, child: FakeElement) {
        let mut node = self.0.borrow_mut();
        {
            let mut child_node = child.0.borrow_mut();
            child_node.previous = node.children.last().cloned();
            child_node.parent = Some(Rc::downgrade(&self.0));
        }
        node.children.push(child);
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    fn is_attached(&self) -> bool {
        self.0
            .borrow()
            .parent
            .as_ref()
            .map(|parent| parent.upgrade().is_some())
            .unwrap_or(false)
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    fn matches(&self, selector: &str) -> bool {
        selector
            .strip_prefix('.')
            .map(|class| self.has_class(class))
            .unwrap_or(false)
    }

    fn collect(&self, selector: &str, found: &mut Vec<FakeElement>) {
        for child in self.0.borrow().children.iter() {
            if child.matches(selector) {
                found.push(child.clone());
            }
            child.collect(selector, found);
        }
    }
}

fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.parse().ok()
}

impl PageElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn put_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn drop_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.remove(name);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn previous_element(&self) -> Option<Self> {
        self.0.borrow().previous.clone()
    }

    fn find(&self, selector: &str) -> Option<Self> {
        let mut found = Vec::new();
        self.collect(selector, &mut found);
        found.into_iter().next()
    }

    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn detach(&self) {
        let parent = {
            let mut node = self.0.borrow_mut();
            node.previous = None;
            node.parent.take().and_then(|parent| parent.upgrade())
        };
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .children
                .retain(|child| !Rc::ptr_eq(&child.0, &self.0));
        }
    }

    fn rendered_size(&self) -> BoxSize {
        let node = self.0.borrow();
        let width = node.styles.get("width").and_then(|v| parse_px(v));
        let height = node.styles.get("height").and_then(|v| parse_px(v));
        BoxSize::new(
            width.unwrap_or(node.intrinsic.width),
            height.unwrap_or(node.intrinsic.height),
        )
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn clear_style(&self, property: &str) {
        self.0.borrow_mut().styles.remove(property);
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        self.0
            .borrow()
            .computed
            .get(property)
            .filter(|v| !v.trim().is_empty())
            .cloned()
    }
}

#[derive(Clone)]
pub struct FakePage {
    pub body: FakeElement,
    viewport_width: Rc<Cell<f64>>,
    root_properties: HashMap<String, String>,
    async_clipboard: Option<Rc<dyn ClipboardWriter>>,
    /// What `exec_copy` reports
    copy_result: PromoResult<bool>,
    selection: Rc<RefCell<Option<FakeElement>>>,
    copied: Rc<RefCell<Vec<String>>>,
}

impl FakePage {
    pub fn new(viewport_width: f64, body: FakeElement) -> Self {
        Self {
            body,
            viewport_width: Rc::new(Cell::new(viewport_width)),
            root_properties: HashMap::new(),
            async_clipboard: None,
            copy_result: Ok(true),
            selection: Rc::new(RefCell::new(None)),
            copied: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_root_property(mut self, name: &str, value: &str) -> Self {
        self.root_properties
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_async_clipboard(mut self, writer: Rc<dyn ClipboardWriter>) -> Self {
        self.async_clipboard = Some(writer);
        self
    }

    pub fn with_copy_result(mut self, result: PromoResult<bool>) -> Self {
        self.copy_result = result;
        self
    }

    pub fn resize(&self, width: f64) {
        self.viewport_width.set(width);
    }

    /// Texts placed on the clipboard through `exec_copy`
    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl Page for FakePage {
    type Element = FakeElement;

    fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }

    fn select_all(&self, selector: &str) -> Vec<FakeElement> {
        let mut found = Vec::new();
        self.body.collect(selector, &mut found);
        found
    }

    fn root_property(&self, name: &str) -> Option<String> {
        self.root_properties
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn async_clipboard(&self) -> Option<Rc<dyn ClipboardWriter>> {
        self.async_clipboard.clone()
    }

    fn append_hidden_textarea(&self, text: &str) -> PromoResult<FakeElement> {
        let textarea = FakeElement::new()
            .with_text(text)
            .with_attribute("readonly", "")
            .with_attribute("aria-hidden", "true");
        textarea.set_style("position", "fixed");
        textarea.set_style("left", "-9999px");
        self.body.append(textarea.clone());
        *self.selection.borrow_mut() = Some(textarea.clone());
        Ok(textarea)
    }

    fn exec_copy(&self) -> PromoResult<bool> {
        let copied = self.copy_result.clone()?;
        if copied {
            // Only a selection still in the document can be copied
            if let Some(selected) = self.selection.borrow().as_ref().filter(|e| e.is_attached()) {
                self.copied.borrow_mut().push(selected.text());
            }
        }
        Ok(copied)
    }
}
