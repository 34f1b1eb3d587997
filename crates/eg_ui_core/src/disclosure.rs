//! Dropdowns and popovers: at most one of each open page-wide.
//!
//! A click is classified once against the markup (trigger, inside a panel, on a dropdown item)
//! and the two registers then decide every transition for that click.

use crate::dom::{DomBackend, ElementKey};
use crate::markup;
use crate::register::{Exclusivity, OpenRegister, Transition};

/// What a click landed on, as far as dropdowns and popovers are concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickContext {
    /// Panel named by a popover trigger the click landed on.
    pub popover_trigger: Option<ElementKey>,
    /// Dropdown container whose trigger the click landed on.
    pub dropdown_trigger: Option<ElementKey>,
    /// Popover panel containing the click target.
    pub within_popover: Option<ElementKey>,
    /// Dropdown container containing the click target.
    pub within_dropdown: Option<ElementKey>,
    /// The click landed on an item of `within_dropdown`.
    pub on_dropdown_item: bool,
}

impl ClickContext {
    pub fn classify<B: DomBackend>(dom: &mut B, target: ElementKey) -> Self {
        let popover_trigger = dom
            .closest(target, markup::POPOVER_TOGGLE)
            .and_then(|trigger| resolve_popover_panel(dom, trigger));
        let dropdown_trigger = dom
            .closest(target, markup::DROPDOWN_TOGGLE)
            .and_then(|trigger| dom.closest(trigger, &markup::class_selector(markup::DROPDOWN)));
        let within_popover = dom.closest(target, &markup::class_selector(markup::POPOVER));
        let within_dropdown = dom.closest(target, &markup::class_selector(markup::DROPDOWN));
        let on_dropdown_item = match (
            within_dropdown,
            dom.closest(target, &markup::class_selector(markup::DROPDOWN_ITEM)),
        ) {
            (Some(dropdown), Some(item)) => dom.contains(dropdown, item),
            _ => false,
        };

        Self {
            popover_trigger,
            dropdown_trigger,
            within_popover,
            within_dropdown,
            on_dropdown_item,
        }
    }

    /// Whether the click hit a trigger whose default action should be suppressed.
    pub fn hit_trigger(&self) -> bool {
        self.popover_trigger.is_some() || self.dropdown_trigger.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisclosureController {
    popovers: OpenRegister<(), ElementKey>,
    dropdowns: OpenRegister<(), ElementKey>,
}

impl DisclosureController {
    /// Adopts panels already marked open, keeping only the last of each kind.
    pub fn install<B: DomBackend>(&mut self, dom: &mut B) {
        let popover_selector = format!(
            "{}{}",
            markup::class_selector(markup::POPOVER),
            markup::class_selector(markup::POPOVER_OPEN)
        );
        for panel in dom.query_all(&popover_selector) {
            let transition = self.popovers.open(&(), panel, Exclusivity::Single);
            project(dom, transition, markup::POPOVER_OPEN);
        }

        let dropdown_selector = format!(
            "{}{}",
            markup::class_selector(markup::DROPDOWN),
            markup::class_selector(markup::DROPDOWN_OPEN)
        );
        for dropdown in dom.query_all(&dropdown_selector) {
            let transition = self.dropdowns.open(&(), dropdown, Exclusivity::Single);
            project(dom, transition, markup::DROPDOWN_OPEN);
        }
    }

    /// Handles a document click; returns `true` if a trigger was hit.
    pub fn handle_click<B: DomBackend>(&mut self, dom: &mut B, target: ElementKey) -> bool {
        let context = ClickContext::classify(dom, target);
        self.apply(dom, &context);
        context.hit_trigger()
    }

    /// Applies the transitions implied by a classified click.
    pub fn apply<B: DomBackend>(&mut self, dom: &mut B, context: &ClickContext) {
        if let Some(dropdown) = context.dropdown_trigger {
            let closed = self.popovers.close_all(&());
            project(
                dom,
                Transition {
                    closed,
                    opened: None,
                },
                markup::POPOVER_OPEN,
            );
            let transition = self.dropdowns.toggle(&(), dropdown, Exclusivity::Single);
            project(dom, transition, markup::DROPDOWN_OPEN);
            return;
        }

        if let Some(panel) = context.popover_trigger {
            let transition = self.popovers.toggle(&(), panel, Exclusivity::Single);
            project(dom, transition, markup::POPOVER_OPEN);
        } else {
            let closed = self.popovers.close_all_except(&(), context.within_popover);
            project(
                dom,
                Transition {
                    closed,
                    opened: None,
                },
                markup::POPOVER_OPEN,
            );
        }

        let keep = context
            .within_dropdown
            .filter(|_| !context.on_dropdown_item);
        let closed = self.dropdowns.close_all_except(&(), keep);
        project(
            dom,
            Transition {
                closed,
                opened: None,
            },
            markup::DROPDOWN_OPEN,
        );
    }

    pub fn open_popover(&self) -> Option<ElementKey> {
        self.popovers.open_members(&()).first().copied()
    }

    pub fn open_dropdown(&self) -> Option<ElementKey> {
        self.dropdowns.open_members(&()).first().copied()
    }
}

/// Resolves a popover trigger's panel from `data-target`, falling back to the `href` fragment.
fn resolve_popover_panel<B: DomBackend>(dom: &mut B, trigger: ElementKey) -> Option<ElementKey> {
    let reference = dom
        .attribute(trigger, markup::TARGET_ATTR)
        .or_else(|| dom.attribute(trigger, "href"))?;
    let id = markup::fragment_id(&reference)?;
    dom.element_by_id(id)
}

fn project<B: DomBackend>(dom: &mut B, transition: Transition<ElementKey>, open_class: &str) {
    for closed in transition.closed {
        dom.remove_class(closed, open_class);
    }
    if let Some(opened) = transition.opened {
        dom.add_class(opened, open_class);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::MemoryDom;

    struct Dropdown {
        container: ElementKey,
        trigger: ElementKey,
        item: ElementKey,
    }

    struct Popover {
        trigger: ElementKey,
        panel: ElementKey,
        panel_body: ElementKey,
    }

    fn dropdown(dom: &mut MemoryDom) -> Dropdown {
        let body = dom.body().expect("body");
        let container = dom.element(body, "div", "eg-ui-dropdown");
        let trigger = dom.element(container, "button", "eg-ui-dropdown-toggle");
        dom.set_attribute(trigger, "data-eg-ui-toggle", "dropdown");
        let menu = dom.element(container, "div", "eg-ui-dropdown-menu");
        let item = dom.element(menu, "a", "eg-ui-dropdown-item");
        Dropdown {
            container,
            trigger,
            item,
        }
    }

    fn popover(dom: &mut MemoryDom, id: &str, use_href: bool) -> Popover {
        let body = dom.body().expect("body");
        let trigger = dom.element(body, "button", "");
        dom.set_attribute(trigger, "data-eg-ui-toggle", "popover");
        if use_href {
            dom.set_attribute(trigger, "href", &format!("#{id}"));
        } else {
            dom.set_attribute(trigger, "data-target", id);
        }
        let panel = dom.element_with_id(body, "div", "eg-ui-popover", id);
        let panel_body = dom.element(panel, "p", "");
        Popover {
            trigger,
            panel,
            panel_body,
        }
    }

    #[test]
    fn opening_a_second_dropdown_closes_the_first_and_all_popovers() {
        let mut dom = MemoryDom::new();
        let a = dropdown(&mut dom);
        let b = dropdown(&mut dom);
        let p = popover(&mut dom, "tip", false);
        let mut controller = DisclosureController::default();

        assert!(controller.handle_click(&mut dom, a.trigger));
        assert!(controller.handle_click(&mut dom, p.trigger));
        assert_eq!(controller.open_popover(), Some(p.panel));

        assert!(controller.handle_click(&mut dom, b.trigger));
        assert_eq!(controller.open_dropdown(), Some(b.container));
        assert_eq!(controller.open_popover(), None);
        assert_eq!(dom.query_all(".eg-ui-dropdown--open"), vec![b.container]);
        assert_eq!(dom.query_all(".eg-ui-popover--open"), Vec::new());
    }

    #[test]
    fn dropdown_trigger_toggles_closed_on_second_click() {
        let mut dom = MemoryDom::new();
        let a = dropdown(&mut dom);
        let mut controller = DisclosureController::default();

        controller.handle_click(&mut dom, a.trigger);
        controller.handle_click(&mut dom, a.trigger);
        assert_eq!(controller.open_dropdown(), None);
        assert!(!dom.has_class(a.container, "eg-ui-dropdown--open"));
    }

    #[test]
    fn item_click_closes_its_dropdown() {
        let mut dom = MemoryDom::new();
        let a = dropdown(&mut dom);
        let mut controller = DisclosureController::default();

        controller.handle_click(&mut dom, a.trigger);
        assert!(!controller.handle_click(&mut dom, a.item));
        assert_eq!(controller.open_dropdown(), None);
    }

    #[test]
    fn outside_click_closes_dropdown_and_popover_but_inside_click_keeps_popover() {
        let mut dom = MemoryDom::new();
        let a = dropdown(&mut dom);
        let p = popover(&mut dom, "tip", true);
        let mut controller = DisclosureController::default();
        let body = dom.body().expect("body");

        controller.handle_click(&mut dom, p.trigger);
        controller.handle_click(&mut dom, p.panel_body);
        assert_eq!(controller.open_popover(), Some(p.panel));

        controller.handle_click(&mut dom, a.trigger);
        assert_eq!(controller.open_popover(), None);

        controller.handle_click(&mut dom, body);
        assert_eq!(controller.open_dropdown(), None);
    }

    #[test]
    fn popover_triggers_keep_at_most_one_open() {
        let mut dom = MemoryDom::new();
        let first = popover(&mut dom, "one", false);
        let second = popover(&mut dom, "two", true);
        let mut controller = DisclosureController::default();

        controller.handle_click(&mut dom, first.trigger);
        controller.handle_click(&mut dom, second.trigger);
        assert_eq!(dom.query_all(".eg-ui-popover--open"), vec![second.panel]);

        controller.handle_click(&mut dom, second.trigger);
        assert_eq!(controller.open_popover(), None);
    }

    #[test]
    fn trigger_with_unknown_target_behaves_like_an_outside_click() {
        let mut dom = MemoryDom::new();
        let p = popover(&mut dom, "tip", false);
        let body = dom.body().expect("body");
        let stray = dom.element(body, "button", "");
        dom.set_attribute(stray, "data-eg-ui-toggle", "popover");
        dom.set_attribute(stray, "data-target", "#missing");
        let mut controller = DisclosureController::default();

        controller.handle_click(&mut dom, p.trigger);
        assert!(!controller.handle_click(&mut dom, stray));
        assert_eq!(controller.open_popover(), None);
    }

    #[test]
    fn install_keeps_only_one_pre_opened_dropdown() {
        let mut dom = MemoryDom::new();
        let a = dropdown(&mut dom);
        let b = dropdown(&mut dom);
        dom.add_class(a.container, "eg-ui-dropdown--open");
        dom.add_class(b.container, "eg-ui-dropdown--open");
        let mut controller = DisclosureController::default();

        controller.install(&mut dom);
        assert_eq!(controller.open_dropdown(), Some(b.container));
        assert!(!dom.has_class(a.container, "eg-ui-dropdown--open"));
    }
}
