//! `web-sys` implementation of [`DomBackend`].

use eg_ui_core::{DomBackend, ElementKey};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, Event, HtmlElement, Node, NodeList};

use crate::table::ElementTable;

const STYLESHEET_LINKS: &str = "link[rel~=\"stylesheet\"][href]";

/// The live browser document.
#[derive(Debug)]
pub struct WebDom {
    document: Document,
    elements: ElementTable<Element>,
    /// Body `overflow` value saved while scrolling is locked.
    saved_overflow: Option<String>,
}

impl WebDom {
    /// Wraps `document`.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            elements: ElementTable::default(),
            saved_overflow: None,
        }
    }

    /// Wraps the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    /// Interns `element`.
    pub fn key_for(&mut self, element: &Element) -> ElementKey {
        self.elements.intern(element.clone())
    }

    /// Key for the element an event was dispatched to.
    ///
    /// Text-node targets resolve to their parent element.
    pub fn event_target(&mut self, event: &Event) -> Option<ElementKey> {
        let target = event.target()?;
        let element = match target.dyn_into::<Element>() {
            Ok(element) => element,
            Err(target) => target.dyn_into::<Node>().ok()?.parent_element()?,
        };
        Some(self.key_for(&element))
    }

    fn element(&self, key: ElementKey) -> Option<&Element> {
        self.elements.get(key)
    }

    fn collect(&mut self, list: Option<NodeList>) -> Vec<ElementKey> {
        let Some(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.key_for(&element))
            .collect()
    }

    fn body_style(&self) -> Option<CssStyleDeclaration> {
        self.document.body().map(|body| body.style())
    }
}

impl DomBackend for WebDom {
    fn element_by_id(&mut self, id: &str) -> Option<ElementKey> {
        let element = self.document.get_element_by_id(id)?;
        Some(self.key_for(&element))
    }

    fn query_selector(&mut self, selector: &str) -> Option<ElementKey> {
        let element = self.document.query_selector(selector).ok().flatten()?;
        Some(self.key_for(&element))
    }

    fn query_all(&mut self, selector: &str) -> Vec<ElementKey> {
        let list = self.document.query_selector_all(selector).ok();
        self.collect(list)
    }

    fn query_all_within(&mut self, scope: ElementKey, selector: &str) -> Vec<ElementKey> {
        let list = self
            .element(scope)
            .and_then(|scope| scope.query_selector_all(selector).ok());
        self.collect(list)
    }

    fn closest(&mut self, from: ElementKey, selector: &str) -> Option<ElementKey> {
        let found = self.element(from)?.closest(selector).ok().flatten()?;
        Some(self.key_for(&found))
    }

    fn contains(&self, ancestor: ElementKey, node: ElementKey) -> bool {
        match (self.element(ancestor), self.element(node)) {
            (Some(ancestor), Some(node)) => {
                let node: &Node = node;
                ancestor.contains(Some(node))
            }
            _ => false,
        }
    }

    fn has_class(&self, key: ElementKey, class: &str) -> bool {
        self.element(key)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn attribute(&self, key: ElementKey, name: &str) -> Option<String> {
        self.element(key)?.get_attribute(name)
    }

    fn content_height(&self, key: ElementKey) -> f64 {
        self.element(key)
            .map_or(0.0, |element| f64::from(element.scroll_height()))
    }

    fn body(&mut self) -> Option<ElementKey> {
        let body = self.document.body()?;
        Some(self.key_for(&body))
    }

    fn root(&mut self) -> Option<ElementKey> {
        let root = self.document.document_element()?;
        Some(self.key_for(&root))
    }

    fn stylesheet_hrefs(&self) -> Vec<String> {
        let Ok(links) = self.document.query_selector_all(STYLESHEET_LINKS) else {
            return Vec::new();
        };
        (0..links.length())
            .filter_map(|index| links.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|link| link.get_attribute("href"))
            .collect()
    }

    fn add_class(&mut self, key: ElementKey, class: &str) {
        if let Some(element) = self.element(key) {
            let _ = element.class_list().add_1(class);
        }
    }

    fn remove_class(&mut self, key: ElementKey, class: &str) {
        if let Some(element) = self.element(key) {
            let _ = element.class_list().remove_1(class);
        }
    }

    fn set_attribute(&mut self, key: ElementKey, name: &str, value: &str) {
        if let Some(element) = self.element(key) {
            let _ = element.set_attribute(name, value);
        }
    }

    fn set_height_px(&mut self, key: ElementKey, height: f64) {
        let Some(element) = self.element(key).and_then(|e| e.dyn_ref::<HtmlElement>()) else {
            return;
        };
        let _ = element.style().set_property("height", &format!("{height}px"));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        if locked == self.saved_overflow.is_some() {
            return;
        }
        let Some(style) = self.body_style() else {
            return;
        };
        if locked {
            let previous = style.get_property_value("overflow").unwrap_or_default();
            let _ = style.set_property("overflow", "hidden");
            self.saved_overflow = Some(previous);
        } else if let Some(previous) = self.saved_overflow.take() {
            if previous.is_empty() {
                let _ = style.remove_property("overflow");
            } else {
                let _ = style.set_property("overflow", &previous);
            }
        }
    }

    fn scroll_locked(&self) -> bool {
        self.saved_overflow.is_some()
    }

    fn create_element(&mut self, tag: &str, class_name: &str) -> Option<ElementKey> {
        let element = self.document.create_element(tag).ok()?;
        element.set_class_name(class_name);
        Some(self.key_for(&element))
    }

    fn set_text(&mut self, key: ElementKey, text: &str) {
        if let Some(element) = self.element(key) {
            element.set_text_content(Some(text));
        }
    }

    fn append_child(&mut self, parent: ElementKey, child: ElementKey) {
        if let (Some(parent), Some(child)) = (self.element(parent), self.element(child)) {
            let _ = parent.append_child(child);
        }
    }

    fn remove_element(&mut self, key: ElementKey) {
        if let Some(element) = self.element(key) {
            element.remove();
        }
    }

    fn is_connected(&self, key: ElementKey) -> bool {
        self.element(key).is_some_and(|element| element.is_connected())
    }

    fn release(&mut self, key: ElementKey) {
        self.elements.release(key);
    }
}
