//! Headless in-memory [`DomBackend`] used for native tests and non-browser hosts.
//!
//! Supports compound simple selectors only (`tag`, `#id`, `.class`, `[attr]`, `[attr="v"]`
//! with no combinators), which covers every selector the toolkit issues.

use std::collections::BTreeMap;

use crate::dom::{DomBackend, ElementKey};

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    parent: Option<ElementKey>,
    children: Vec<ElementKey>,
    text: String,
    content_height: f64,
    height_px: Option<f64>,
}

#[derive(Debug, Clone)]
/// In-memory document tree with an `<html>` root and an optional `<body>`.
pub struct MemoryDom {
    nodes: Vec<Node>,
    root: ElementKey,
    body: Option<ElementKey>,
    overflow: String,
    saved_overflow: Option<String>,
    stylesheets: Vec<String>,
    released: Vec<ElementKey>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Creates a document with `<html>` and an attached `<body>`.
    pub fn new() -> Self {
        let mut dom = Self::without_body();
        dom.attach_body();
        dom
    }

    /// Creates a document whose `<body>` has not been parsed yet.
    pub fn without_body() -> Self {
        Self {
            nodes: vec![Node {
                tag: "html".to_string(),
                ..Node::default()
            }],
            root: ElementKey(0),
            body: None,
            overflow: String::new(),
            saved_overflow: None,
            stylesheets: Vec::new(),
            released: Vec::new(),
        }
    }

    /// Attaches `<body>` to the root, returning the existing body if already present.
    pub fn attach_body(&mut self) -> ElementKey {
        if let Some(body) = self.body {
            return body;
        }
        let body = self.element(self.root, "body", "");
        self.body = Some(body);
        body
    }

    /// Appends a new element under `parent`. `classes` is a space-separated class list.
    pub fn element(&mut self, parent: ElementKey, tag: &str, classes: &str) -> ElementKey {
        let key = self.push_node(tag, classes);
        self.append_child(parent, key);
        key
    }

    /// Appends a new element with an `id` under `parent`.
    pub fn element_with_id(
        &mut self,
        parent: ElementKey,
        tag: &str,
        classes: &str,
        id: &str,
    ) -> ElementKey {
        let key = self.element(parent, tag, classes);
        self.set_attribute(key, "id", id);
        key
    }

    pub fn set_content_height(&mut self, key: ElementKey, height: f64) {
        if let Some(node) = self.node_mut(key) {
            node.content_height = height;
        }
    }

    /// Inline pixel height last set on `key`, if any.
    pub fn height_px(&self, key: ElementKey) -> Option<f64> {
        self.node(key).and_then(|node| node.height_px)
    }

    /// Current page overflow style value.
    pub fn overflow(&self) -> &str {
        &self.overflow
    }

    /// Sets the page overflow style as host page code would.
    pub fn set_overflow(&mut self, value: &str) {
        self.overflow = value.to_string();
    }

    pub fn add_stylesheet(&mut self, href: &str) {
        self.stylesheets.push(href.to_string());
    }

    /// Keys handed back through [`DomBackend::release`], in release order.
    pub fn released(&self) -> &[ElementKey] {
        &self.released
    }

    pub fn text(&self, key: ElementKey) -> &str {
        self.node(key).map(|node| node.text.as_str()).unwrap_or("")
    }

    pub fn children(&self, key: ElementKey) -> &[ElementKey] {
        self.node(key)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, key: ElementKey) -> Option<ElementKey> {
        self.node(key).and_then(|node| node.parent)
    }

    pub fn tag(&self, key: ElementKey) -> &str {
        self.node(key).map(|node| node.tag.as_str()).unwrap_or("")
    }

    fn push_node(&mut self, tag: &str, classes: &str) -> ElementKey {
        let key = ElementKey(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            classes: classes.split_whitespace().map(str::to_string).collect(),
            ..Node::default()
        });
        key
    }

    fn node(&self, key: ElementKey) -> Option<&Node> {
        self.nodes.get(key.0)
    }

    fn node_mut(&mut self, key: ElementKey) -> Option<&mut Node> {
        self.nodes.get_mut(key.0)
    }

    fn detach(&mut self, key: ElementKey) {
        let Some(parent) = self.node(key).and_then(|node| node.parent) else {
            return;
        };
        if let Some(parent) = self.node_mut(parent) {
            parent.children.retain(|child| *child != key);
        }
        if let Some(node) = self.node_mut(key) {
            node.parent = None;
        }
    }

    fn descendants(&self, scope: ElementKey) -> Vec<ElementKey> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementKey> = self.children(scope).iter().rev().copied().collect();
        while let Some(key) = stack.pop() {
            out.push(key);
            stack.extend(self.children(key).iter().rev().copied());
        }
        out
    }

    fn matches(&self, key: ElementKey, selector: &Selector) -> bool {
        let Some(node) = self.node(key) else {
            return false;
        };
        if let Some(tag) = &selector.tag {
            if &node.tag != tag {
                return false;
            }
        }
        selector.parts.iter().all(|part| match part {
            SelectorPart::Id(id) => node.attributes.get("id") == Some(id),
            SelectorPart::Class(class) => node.classes.iter().any(|c| c == class),
            SelectorPart::Attribute(name, None) => node.attributes.contains_key(name),
            SelectorPart::Attribute(name, Some(value)) => node.attributes.get(name) == Some(value),
        })
    }
}

impl DomBackend for MemoryDom {
    fn element_by_id(&mut self, id: &str) -> Option<ElementKey> {
        self.descendants(self.root)
            .into_iter()
            .find(|key| self.attribute(*key, "id").as_deref() == Some(id))
    }

    fn query_selector(&mut self, selector: &str) -> Option<ElementKey> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&mut self, selector: &str) -> Vec<ElementKey> {
        self.query_all_within(self.root, selector)
    }

    fn query_all_within(&mut self, scope: ElementKey, selector: &str) -> Vec<ElementKey> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.descendants(scope)
            .into_iter()
            .filter(|key| self.matches(*key, &selector))
            .collect()
    }

    fn closest(&mut self, from: ElementKey, selector: &str) -> Option<ElementKey> {
        let selector = Selector::parse(selector)?;
        let mut cursor = Some(from);
        while let Some(key) = cursor {
            if self.matches(key, &selector) {
                return Some(key);
            }
            cursor = self.parent(key);
        }
        None
    }

    fn contains(&self, ancestor: ElementKey, node: ElementKey) -> bool {
        let mut cursor = Some(node);
        while let Some(key) = cursor {
            if key == ancestor {
                return true;
            }
            cursor = self.parent(key);
        }
        false
    }

    fn has_class(&self, key: ElementKey, class: &str) -> bool {
        self.node(key)
            .map(|node| node.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn attribute(&self, key: ElementKey, name: &str) -> Option<String> {
        self.node(key)
            .and_then(|node| node.attributes.get(name))
            .cloned()
    }

    fn content_height(&self, key: ElementKey) -> f64 {
        self.node(key).map(|node| node.content_height).unwrap_or(0.0)
    }

    fn body(&mut self) -> Option<ElementKey> {
        self.body
    }

    fn root(&mut self) -> Option<ElementKey> {
        Some(self.root)
    }

    fn stylesheet_hrefs(&self) -> Vec<String> {
        self.stylesheets.clone()
    }

    fn add_class(&mut self, key: ElementKey, class: &str) {
        if let Some(node) = self.node_mut(key) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, key: ElementKey, class: &str) {
        if let Some(node) = self.node_mut(key) {
            node.classes.retain(|c| c != class);
        }
    }

    fn set_attribute(&mut self, key: ElementKey, name: &str, value: &str) {
        if let Some(node) = self.node_mut(key) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_height_px(&mut self, key: ElementKey, height: f64) {
        if let Some(node) = self.node_mut(key) {
            node.height_px = Some(height);
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        match (locked, self.saved_overflow.is_some()) {
            (true, false) => {
                self.saved_overflow = Some(std::mem::replace(
                    &mut self.overflow,
                    "hidden".to_string(),
                ));
            }
            (false, true) => {
                self.overflow = self.saved_overflow.take().unwrap_or_default();
            }
            _ => {}
        }
    }

    fn scroll_locked(&self) -> bool {
        self.saved_overflow.is_some()
    }

    fn create_element(&mut self, tag: &str, class_name: &str) -> Option<ElementKey> {
        Some(self.push_node(tag, class_name))
    }

    fn set_text(&mut self, key: ElementKey, text: &str) {
        let children = self.children(key).to_vec();
        for child in children {
            self.detach(child);
        }
        if let Some(node) = self.node_mut(key) {
            node.text = text.to_string();
        }
    }

    fn append_child(&mut self, parent: ElementKey, child: ElementKey) {
        if parent == child || self.contains(child, parent) {
            return;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        } else {
            return;
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
    }

    fn remove_element(&mut self, key: ElementKey) {
        self.detach(key);
    }

    fn is_connected(&self, key: ElementKey) -> bool {
        self.contains(self.root, key)
    }

    fn release(&mut self, key: ElementKey) {
        self.released.push(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Selector {
    tag: Option<String>,
    parts: Vec<SelectorPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SelectorPart {
    Id(String),
    Class(String),
    Attribute(String, Option<String>),
}

impl Selector {
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let tag_len = raw
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .unwrap_or(raw.len());
        let tag = (tag_len > 0).then(|| raw[..tag_len].to_ascii_lowercase());
        let mut rest = &raw[tag_len..];
        let mut parts = Vec::new();

        while let Some(first) = rest.chars().next() {
            match first {
                '#' | '.' => {
                    let body = &rest[1..];
                    let end = body.find(['#', '.', '[']).unwrap_or(body.len());
                    let ident = &body[..end];
                    if ident.is_empty() || ident.contains(char::is_whitespace) {
                        return None;
                    }
                    parts.push(if first == '#' {
                        SelectorPart::Id(ident.to_string())
                    } else {
                        SelectorPart::Class(ident.to_string())
                    });
                    rest = &body[end..];
                }
                '[' => {
                    let end = rest.find(']')?;
                    let inner = &rest[1..end];
                    let part = match inner.split_once('=') {
                        Some((name, value)) => SelectorPart::Attribute(
                            name.trim().to_string(),
                            Some(value.trim().trim_matches(['"', '\'']).to_string()),
                        ),
                        None => SelectorPart::Attribute(inner.trim().to_string(), None),
                    };
                    if matches!(&part, SelectorPart::Attribute(name, _) if name.is_empty()) {
                        return None;
                    }
                    parts.push(part);
                    rest = &rest[end + 1..];
                }
                _ => return None,
            }
        }

        if tag.is_none() && parts.is_empty() {
            return None;
        }
        Some(Self { tag, parts })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn selector_parse_supports_compound_simple_selectors() {
        let parsed = Selector::parse("div.a.b#x[data-k=\"v\"][flag]").expect("selector");
        assert_eq!(parsed.tag.as_deref(), Some("div"));
        assert_eq!(
            parsed.parts,
            vec![
                SelectorPart::Class("a".into()),
                SelectorPart::Class("b".into()),
                SelectorPart::Id("x".into()),
                SelectorPart::Attribute("data-k".into(), Some("v".into())),
                SelectorPart::Attribute("flag".into(), None),
            ]
        );
    }

    #[test]
    fn selector_parse_rejects_malformed_input() {
        assert_eq!(Selector::parse(""), None);
        assert_eq!(Selector::parse("#"), None);
        assert_eq!(Selector::parse(".a .b"), None);
        assert_eq!(Selector::parse("[unterminated"), None);
    }

    #[test]
    fn queries_follow_document_order_and_skip_detached_nodes() {
        let mut dom = MemoryDom::new();
        let body = dom.body().expect("body");
        let first = dom.element(body, "div", "item");
        let nested = dom.element(first, "span", "item");
        let second = dom.element(body, "div", "item");
        let detached = dom.create_element("div", "item").expect("create");

        assert_eq!(dom.query_all(".item"), vec![first, nested, second]);
        assert!(!dom.is_connected(detached));

        dom.remove_element(first);
        assert_eq!(dom.query_all(".item"), vec![second]);
        assert_eq!(dom.closest(nested, ".item"), Some(nested));
        assert_eq!(dom.closest(nested, "div"), Some(first));
    }

    #[test]
    fn scroll_lock_restores_previous_overflow() {
        let mut dom = MemoryDom::new();
        dom.set_overflow("auto");

        dom.set_scroll_locked(true);
        dom.set_scroll_locked(true);
        assert_eq!(dom.overflow(), "hidden");

        dom.set_scroll_locked(false);
        assert_eq!(dom.overflow(), "auto");
        assert!(!dom.scroll_locked());
    }
}
