//! Tab groups: a nav of links paired with a content area of panes.

use std::collections::BTreeSet;

use crate::dom::{DomBackend, ElementKey};
use crate::markup;
use crate::register::{Exclusivity, OpenRegister};

#[derive(Debug, Clone, Default)]
pub struct TabController {
    links: OpenRegister<ElementKey, ElementKey>,
    panes: OpenRegister<ElementKey, ElementKey>,
    seeded: BTreeSet<ElementKey>,
}

impl TabController {
    /// Seeds every nav and content group present at load time.
    pub fn install<B: DomBackend>(&mut self, dom: &mut B) {
        for nav in dom.query_all(&markup::class_selector(markup::NAV)) {
            self.seed_nav(dom, nav);
        }
        for content in dom.query_all(&markup::class_selector(markup::TAB_CONTENT)) {
            self.seed_content(dom, content);
        }
    }

    /// Handles a click anywhere in the document.
    ///
    /// Returns `true` when the click landed on a tab link, in which case the host must suppress
    /// the link's default navigation even if no pane matched.
    pub fn handle_click<B: DomBackend>(&mut self, dom: &mut B, target: ElementKey) -> bool {
        let Some(link) = dom.closest(target, markup::TAB_TOGGLE) else {
            return false;
        };
        self.activate(dom, link);
        true
    }

    /// Activates `link` and the pane its `href`/`data-target` selects.
    ///
    /// Nothing changes when the link names no selector or the selector matches nothing.
    pub fn activate<B: DomBackend>(&mut self, dom: &mut B, link: ElementKey) -> bool {
        let Some(selector) = target_selector(dom, link) else {
            return false;
        };
        let Some(pane) = dom.query_selector(&selector) else {
            return false;
        };

        if let Some(nav) = dom.closest(link, &markup::class_selector(markup::NAV)) {
            self.seed_nav(dom, nav);
            for sibling in self.links.open(&nav, link, Exclusivity::Single).closed {
                deselect_link(dom, sibling);
            }
        }
        dom.add_class(link, markup::ACTIVE);
        dom.set_attribute(link, markup::ARIA_SELECTED, "true");

        if let Some(content) = dom.closest(pane, &markup::class_selector(markup::TAB_CONTENT)) {
            self.seed_content(dom, content);
            for sibling in self.panes.open(&content, pane, Exclusivity::Single).closed {
                dom.remove_class(sibling, markup::ACTIVE);
            }
        }
        dom.add_class(pane, markup::ACTIVE);
        true
    }

    pub fn active_link(&self, nav: ElementKey) -> Option<ElementKey> {
        self.links.open_members(&nav).first().copied()
    }

    pub fn active_pane(&self, content: ElementKey) -> Option<ElementKey> {
        self.panes.open_members(&content).first().copied()
    }

    fn seed_nav<B: DomBackend>(&mut self, dom: &mut B, nav: ElementKey) {
        if !self.seeded.insert(nav) {
            return;
        }
        let links = dom.query_all_within(nav, &markup::class_selector(markup::NAV_LINK));
        for link in &links {
            if dom.has_class(*link, markup::ACTIVE) {
                for extra in self.links.open(&nav, *link, Exclusivity::Single).closed {
                    dom.remove_class(extra, markup::ACTIVE);
                }
            }
        }
        for link in links {
            let selected = self.links.is_open(&nav, link);
            dom.set_attribute(link, markup::ARIA_SELECTED, bool_attr(selected));
        }
    }

    fn seed_content<B: DomBackend>(&mut self, dom: &mut B, content: ElementKey) {
        if !self.seeded.insert(content) {
            return;
        }
        for pane in dom.query_all_within(content, &markup::class_selector(markup::TAB_PANE)) {
            if dom.has_class(pane, markup::ACTIVE) {
                for extra in self.panes.open(&content, pane, Exclusivity::Single).closed {
                    dom.remove_class(extra, markup::ACTIVE);
                }
            }
        }
    }
}

fn target_selector<B: DomBackend>(dom: &B, link: ElementKey) -> Option<String> {
    dom.attribute(link, "href")
        .filter(|href| !href.is_empty())
        .or_else(|| dom.attribute(link, markup::TARGET_ATTR))
        .filter(|selector| !selector.trim().is_empty())
}

fn deselect_link<B: DomBackend>(dom: &mut B, link: ElementKey) {
    dom.remove_class(link, markup::ACTIVE);
    dom.set_attribute(link, markup::ARIA_SELECTED, "false");
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
