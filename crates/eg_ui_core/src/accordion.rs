//! Accordions: header clicks expand a body to its measured height or collapse it to zero.

use std::collections::BTreeSet;

use crate::dom::{DomBackend, ElementKey};
use crate::markup;
use crate::register::{Exclusivity, OpenRegister, Transition};

#[derive(Debug, Clone, Default)]
pub struct AccordionController {
    open: OpenRegister<ElementKey, ElementKey>,
    seeded: BTreeSet<ElementKey>,
}

impl AccordionController {
    /// Seeds every accordion and sizes the bodies of items pre-marked active.
    pub fn install<B: DomBackend>(&mut self, dom: &mut B) {
        for accordion in dom.query_all(&markup::class_selector(markup::ACCORDION)) {
            self.seed(dom, accordion);
        }
    }

    /// Handles a document click; returns `true` if an accordion header was hit.
    pub fn handle_click<B: DomBackend>(&mut self, dom: &mut B, target: ElementKey) -> bool {
        let Some(header) = dom.closest(target, &markup::class_selector(markup::ACCORDION_HEADER))
        else {
            return false;
        };
        let Some(item) = dom.closest(header, &markup::class_selector(markup::ACCORDION_ITEM))
        else {
            return false;
        };
        self.toggle(dom, item);
        true
    }

    /// Toggles `item`, closing its open siblings first unless the accordion allows many open.
    ///
    /// An item outside any accordion toggles on its own.
    pub fn toggle<B: DomBackend>(&mut self, dom: &mut B, item: ElementKey) {
        let (group, exclusivity) =
            match dom.closest(item, &markup::class_selector(markup::ACCORDION)) {
                Some(accordion) => {
                    self.seed(dom, accordion);
                    (accordion, exclusivity_of(dom, accordion))
                }
                None => (item, Exclusivity::Multiple),
            };
        let transition = self.open.toggle(&group, item, exclusivity);
        project(dom, transition);
    }

    pub fn is_open(&self, accordion: ElementKey, item: ElementKey) -> bool {
        self.open.is_open(&accordion, item)
    }

    /// Adopts the accordion's own pre-marked active items, all of them, whatever its
    /// exclusivity. Items of nested accordions belong to those accordions.
    fn seed<B: DomBackend>(&mut self, dom: &mut B, accordion: ElementKey) {
        if !self.seeded.insert(accordion) {
            return;
        }
        let root_selector = markup::class_selector(markup::ACCORDION);
        let item_selector = markup::class_selector(markup::ACCORDION_ITEM);
        for item in dom.query_all_within(accordion, &item_selector) {
            if !dom.has_class(item, markup::ACTIVE)
                || dom.closest(item, &root_selector) != Some(accordion)
            {
                continue;
            }
            let transition = self.open.open(&accordion, item, Exclusivity::Multiple);
            project(dom, transition);
        }
    }
}

fn exclusivity_of<B: DomBackend>(dom: &B, accordion: ElementKey) -> Exclusivity {
    if dom.attribute(accordion, markup::ACCORDION_ALWAYS_OPEN).is_some() {
        Exclusivity::Multiple
    } else {
        Exclusivity::Single
    }
}

fn body_of<B: DomBackend>(dom: &mut B, item: ElementKey) -> Option<ElementKey> {
    dom.query_all_within(item, &markup::class_selector(markup::ACCORDION_COLLAPSE))
        .into_iter()
        .next()
}

fn project<B: DomBackend>(dom: &mut B, transition: Transition<ElementKey>) {
    for item in transition.closed {
        dom.remove_class(item, markup::ACTIVE);
        if let Some(body) = body_of(dom, item) {
            dom.set_height_px(body, 0.0);
        }
    }
    if let Some(item) = transition.opened {
        dom.add_class(item, markup::ACTIVE);
        if let Some(body) = body_of(dom, item) {
            let height = dom.content_height(body);
            dom.set_height_px(body, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::MemoryDom;

    struct Item {
        item: ElementKey,
        header: ElementKey,
        body: ElementKey,
    }

    fn accordion(
        dom: &mut MemoryDom,
        always_open: bool,
        heights: &[f64],
    ) -> (ElementKey, Vec<Item>) {
        let page = dom.body().expect("body");
        let root = dom.element(page, "div", "eg-ui-accordion");
        if always_open {
            dom.set_attribute(root, "data-eg-ui-always-open", "");
        }
        let items = heights
            .iter()
            .map(|height| {
                let item = dom.element(root, "div", "eg-ui-accordion-item");
                let header = dom.element(item, "button", "eg-ui-accordion-header");
                let body = dom.element(item, "div", "eg-ui-accordion-collapse");
                dom.set_content_height(body, *height);
                Item { item, header, body }
            })
            .collect();
        (root, items)
    }

    #[test]
    fn single_open_accordion_collapses_the_previous_item() {
        let mut dom = MemoryDom::new();
        let (root, items) = accordion(&mut dom, false, &[120.0, 80.0]);
        let mut controller = AccordionController::default();
        controller.install(&mut dom);

        assert!(controller.handle_click(&mut dom, items[0].header));
        assert!(controller.handle_click(&mut dom, items[1].header));

        assert_eq!(dom.height_px(items[0].body), Some(0.0));
        assert_eq!(dom.height_px(items[1].body), Some(80.0));
        assert!(!dom.has_class(items[0].item, "active"));
        assert!(dom.has_class(items[1].item, "active"));
        assert!(controller.is_open(root, items[1].item));
    }

    #[test]
    fn always_open_accordion_keeps_both_items_expanded() {
        let mut dom = MemoryDom::new();
        let (_, items) = accordion(&mut dom, true, &[120.0, 80.0]);
        let mut controller = AccordionController::default();

        controller.handle_click(&mut dom, items[0].header);
        controller.handle_click(&mut dom, items[1].header);

        assert_eq!(dom.height_px(items[0].body), Some(120.0));
        assert_eq!(dom.height_px(items[1].body), Some(80.0));
    }

    #[test]
    fn clicking_an_open_item_collapses_it() {
        let mut dom = MemoryDom::new();
        let (_, items) = accordion(&mut dom, false, &[50.0]);
        let mut controller = AccordionController::default();

        controller.handle_click(&mut dom, items[0].header);
        controller.handle_click(&mut dom, items[0].header);
        assert_eq!(dom.height_px(items[0].body), Some(0.0));
        assert!(!dom.has_class(items[0].item, "active"));
    }

    #[test]
    fn install_expands_items_pre_marked_active() {
        let mut dom = MemoryDom::new();
        let (root, items) = accordion(&mut dom, false, &[64.0, 32.0]);
        dom.add_class(items[1].item, "active");
        let mut controller = AccordionController::default();

        controller.install(&mut dom);
        assert_eq!(dom.height_px(items[1].body), Some(32.0));
        assert_eq!(dom.height_px(items[0].body), None);
        assert!(controller.is_open(root, items[1].item));
    }

    #[test]
    fn install_keeps_every_pre_marked_item_of_a_single_open_accordion() {
        let mut dom = MemoryDom::new();
        let (root, items) = accordion(&mut dom, false, &[40.0, 60.0]);
        dom.add_class(items[0].item, "active");
        dom.add_class(items[1].item, "active");
        let mut controller = AccordionController::default();

        controller.install(&mut dom);
        assert!(dom.has_class(items[0].item, "active"));
        assert_eq!(dom.height_px(items[0].body), Some(40.0));
        assert_eq!(dom.height_px(items[1].body), Some(60.0));

        // Exclusivity applies again from the first click.
        controller.handle_click(&mut dom, items[1].header);
        controller.handle_click(&mut dom, items[1].header);
        assert!(!controller.is_open(root, items[0].item));
        assert_eq!(dom.height_px(items[0].body), Some(0.0));
        assert_eq!(dom.height_px(items[1].body), Some(60.0));
    }

    #[test]
    fn nested_accordions_keep_separate_open_state() {
        let mut dom = MemoryDom::new();
        let (outer, outer_items) = accordion(&mut dom, false, &[200.0, 90.0]);
        let inner = dom.element(outer_items[0].body, "div", "eg-ui-accordion");
        let inner_item = dom.element(inner, "div", "eg-ui-accordion-item active");
        let inner_header = dom.element(inner_item, "button", "eg-ui-accordion-header");
        let inner_body = dom.element(inner_item, "div", "eg-ui-accordion-collapse");
        dom.set_content_height(inner_body, 30.0);
        let mut controller = AccordionController::default();

        controller.install(&mut dom);
        assert!(controller.is_open(inner, inner_item));
        assert!(!controller.is_open(outer, inner_item));

        controller.handle_click(&mut dom, outer_items[1].header);
        assert!(dom.has_class(inner_item, "active"));
        assert_eq!(dom.height_px(inner_body), Some(30.0));

        controller.handle_click(&mut dom, inner_header);
        assert!(!dom.has_class(inner_item, "active"));
        assert_eq!(dom.height_px(inner_body), Some(0.0));
        controller.handle_click(&mut dom, inner_header);
        assert!(dom.has_class(inner_item, "active"));
        assert_eq!(dom.height_px(inner_body), Some(30.0));
    }

    #[test]
    fn clicks_in_the_body_do_not_toggle() {
        let mut dom = MemoryDom::new();
        let (_, items) = accordion(&mut dom, false, &[64.0]);
        let mut controller = AccordionController::default();
        assert!(!controller.handle_click(&mut dom, items[0].body));
    }
}
