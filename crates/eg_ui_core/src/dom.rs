//! Document access contract used by every widget controller.
//!
//! Controllers never hold concrete DOM handles. A [`DomBackend`] interns each element it hands
//! out as an [`ElementKey`], and the same node always maps to the same key for the lifetime of
//! the backend. Lookup misses are reported as `None`/empty results, never as errors.

use serde::{Deserialize, Serialize};

/// Stable handle for an element interned by a [`DomBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementKey(pub usize);

/// Read/write access to a document, implemented by the browser bridge and by
/// [`MemoryDom`](crate::memory::MemoryDom).
///
/// Selector arguments are CSS selectors. Backends must treat an unparseable selector as a miss.
/// Query methods take `&mut self` because resolving an element may intern a new key.
pub trait DomBackend {
    /// Resolves an element by its `id` attribute.
    fn element_by_id(&mut self, id: &str) -> Option<ElementKey>;

    /// First element in document order matching `selector`.
    fn query_selector(&mut self, selector: &str) -> Option<ElementKey>;

    /// All elements in document order matching `selector`.
    fn query_all(&mut self, selector: &str) -> Vec<ElementKey>;

    /// All descendants of `scope` matching `selector`, in document order.
    fn query_all_within(&mut self, scope: ElementKey, selector: &str) -> Vec<ElementKey>;

    /// Nearest inclusive ancestor of `from` matching `selector`.
    fn closest(&mut self, from: ElementKey, selector: &str) -> Option<ElementKey>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: ElementKey, node: ElementKey) -> bool;

    fn has_class(&self, key: ElementKey, class: &str) -> bool;

    fn attribute(&self, key: ElementKey, name: &str) -> Option<String>;

    /// Natural content height of `key` in pixels (`scrollHeight` in a browser).
    fn content_height(&self, key: ElementKey) -> f64;

    /// The `<body>` element, once it exists.
    fn body(&mut self) -> Option<ElementKey>;

    /// The document root element (`<html>`).
    fn root(&mut self) -> Option<ElementKey>;

    /// `href` values of stylesheet `<link>` elements currently in the document.
    fn stylesheet_hrefs(&self) -> Vec<String>;

    fn add_class(&mut self, key: ElementKey, class: &str);

    fn remove_class(&mut self, key: ElementKey, class: &str);

    fn set_attribute(&mut self, key: ElementKey, name: &str, value: &str);

    /// Sets an inline pixel height.
    fn set_height_px(&mut self, key: ElementKey, height: f64);

    /// Locks or unlocks page scrolling.
    ///
    /// Locking remembers the page's current overflow value and unlocking restores it, so
    /// repeated calls with the same value must be no-ops.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Whether page scrolling is currently locked by this backend.
    fn scroll_locked(&self) -> bool;

    /// Creates a detached element with the given tag and `class` attribute.
    fn create_element(&mut self, tag: &str, class_name: &str) -> Option<ElementKey>;

    /// Replaces the text content of `key`. The value is never interpreted as markup.
    fn set_text(&mut self, key: ElementKey, text: &str);

    fn append_child(&mut self, parent: ElementKey, child: ElementKey);

    /// Detaches `key` from the document. Detaching an already detached element is a no-op.
    fn remove_element(&mut self, key: ElementKey);

    /// Whether `key` is currently attached to the document.
    fn is_connected(&self, key: ElementKey) -> bool;

    /// Drops the backend's handle for an element the toolkit will never touch again.
    ///
    /// The key may be reassigned to a different element afterwards.
    fn release(&mut self, key: ElementKey);
}
