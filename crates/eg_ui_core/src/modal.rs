//! Modal dialogs: open/close by id, overlay dismissal, Escape-closes-all, page scroll lock.

use crate::dom::{DomBackend, ElementKey};
use crate::markup;
use crate::register::{Exclusivity, OpenRegister};

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    open: OpenRegister<(), ElementKey>,
}

impl ModalController {
    /// Registers modals already marked open in the markup and locks scrolling if any are.
    pub fn install<B: DomBackend>(&mut self, dom: &mut B) {
        let selector = format!(
            "{}{}",
            markup::class_selector(markup::MODAL),
            markup::class_selector(markup::MODAL_OPEN)
        );
        for modal in dom.query_all(&selector) {
            self.open.open(&(), modal, Exclusivity::Multiple);
        }
        self.sync_scroll_lock(dom);
    }

    /// Opens the modal with element id `id`. Unknown ids are ignored.
    pub fn open<B: DomBackend>(&mut self, dom: &mut B, id: &str) -> bool {
        let Some(modal) = dom.element_by_id(id) else {
            return false;
        };
        self.open_element(dom, modal);
        true
    }

    /// Closes the modal with element id `id`. Unknown ids are ignored.
    pub fn close<B: DomBackend>(&mut self, dom: &mut B, id: &str) -> bool {
        let Some(modal) = dom.element_by_id(id) else {
            return false;
        };
        self.close_element(dom, modal);
        true
    }

    pub fn open_element<B: DomBackend>(&mut self, dom: &mut B, modal: ElementKey) {
        self.open.open(&(), modal, Exclusivity::Multiple);
        dom.add_class(modal, markup::MODAL_OPEN);
        self.sync_scroll_lock(dom);
    }

    pub fn close_element<B: DomBackend>(&mut self, dom: &mut B, modal: ElementKey) {
        self.open.close(&(), modal);
        dom.remove_class(modal, markup::MODAL_OPEN);
        self.sync_scroll_lock(dom);
    }

    /// Closes every open modal; returns how many were closed.
    pub fn close_all<B: DomBackend>(&mut self, dom: &mut B) -> usize {
        let closed = self.open.close_all(&());
        for modal in &closed {
            dom.remove_class(*modal, markup::MODAL_OPEN);
        }
        self.sync_scroll_lock(dom);
        closed.len()
    }

    /// Closes the owning modal when `target` is a modal root or its overlay.
    pub fn handle_click<B: DomBackend>(&mut self, dom: &mut B, target: ElementKey) -> bool {
        let modal = if dom.has_class(target, markup::MODAL) {
            Some(target)
        } else if dom.has_class(target, markup::MODAL_OVERLAY) {
            dom.closest(target, &markup::class_selector(markup::MODAL))
        } else {
            None
        };
        let Some(modal) = modal else {
            return false;
        };
        self.close_element(dom, modal);
        true
    }

    /// Escape-key handler.
    pub fn handle_key<B: DomBackend>(&mut self, dom: &mut B, key: &str) -> usize {
        if key == "Escape" {
            self.close_all(dom)
        } else {
            0
        }
    }

    pub fn is_open(&self, modal: ElementKey) -> bool {
        self.open.is_open(&(), modal)
    }

    pub fn open_count(&self) -> usize {
        self.open.open_count()
    }

    fn sync_scroll_lock<B: DomBackend>(&self, dom: &mut B) {
        dom.set_scroll_locked(self.open.open_count() > 0);
    }
}
