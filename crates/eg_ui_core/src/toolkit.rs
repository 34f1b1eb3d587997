//! The composed toolkit: every widget controller behind one backend.
//!
//! Hosts forward raw document events here (`click` targets, `keydown` keys, `transitionend`
//! targets) and schedule the callbacks that [`ShownToast`] asks for. Each behavior lives in its
//! own controller module; this type only owns them and routes events in a fixed order.

use crate::accordion::AccordionController;
use crate::config::{ConfigError, ToolkitConfig};
use crate::detect::{self, DetectionReport};
use crate::disclosure::DisclosureController;
use crate::dom::{DomBackend, ElementKey};
use crate::markup;
use crate::modal::ModalController;
use crate::tabs::TabController;
use crate::toast::{ShownToast, ToastId, ToastManager, ToastOptions, ToastRequest};

/// Result of routing one click through every controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// The host should call `preventDefault` on the event.
    pub prevent_default: bool,
    /// Some controller reacted to the click.
    pub handled: bool,
}

#[derive(Debug)]
pub struct Toolkit<B> {
    dom: B,
    config: ToolkitConfig,
    installed: bool,
    modals: ModalController,
    toasts: ToastManager,
    tabs: TabController,
    disclosure: DisclosureController,
    accordions: AccordionController,
}

impl<B: DomBackend> Toolkit<B> {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(dom: B, config: ToolkitConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            dom,
            config,
            installed: false,
            modals: ModalController::default(),
            toasts: ToastManager::default(),
            tabs: TabController::default(),
            disclosure: DisclosureController::default(),
            accordions: AccordionController::default(),
        })
    }

    /// Seeds controller state from the current markup. Runs once; later calls return `false`.
    pub fn install(&mut self) -> bool {
        if self.installed {
            return false;
        }
        self.modals.install(&mut self.dom);
        self.tabs.install(&mut self.dom);
        self.disclosure.install(&mut self.dom);
        self.accordions.install(&mut self.dom);
        self.installed = true;
        true
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Replaces the configuration after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] and keeps the previous configuration if validation fails.
    pub fn reconfigure(&mut self, config: ToolkitConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    pub fn dom(&self) -> &B {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut B {
        &mut self.dom
    }

    /// Routes a document click to every controller.
    ///
    /// Controllers are independent, so one click may affect several of them (for example an
    /// item in a dropdown that sits inside an open modal).
    pub fn handle_click(&mut self, target: ElementKey) -> ClickOutcome {
        let mut outcome = ClickOutcome::default();

        if let Some(toast) = self.toast_for_close_control(target) {
            outcome.handled |= self.toasts.hide(&mut self.dom, toast);
        }
        outcome.handled |= self.modals.handle_click(&mut self.dom, target);

        if self.tabs.handle_click(&mut self.dom, target) {
            outcome.handled = true;
            outcome.prevent_default = true;
        }

        let open_before = (self.disclosure.open_popover(), self.disclosure.open_dropdown());
        if self.disclosure.handle_click(&mut self.dom, target) {
            outcome.prevent_default = true;
        }
        outcome.handled |= open_before
            != (self.disclosure.open_popover(), self.disclosure.open_dropdown());

        outcome.handled |= self.accordions.handle_click(&mut self.dom, target);
        outcome
    }

    /// Routes a `keydown`; returns how many modals were closed.
    pub fn handle_keydown(&mut self, key: &str) -> usize {
        self.modals.handle_key(&mut self.dom, key)
    }

    /// Opens a modal by id, or the configured default modal.
    pub fn open_modal(&mut self, id: Option<&str>) -> bool {
        let id = id.unwrap_or(&self.config.default_modal_id).to_string();
        self.modals.open(&mut self.dom, &id)
    }

    /// Closes a modal by id, or the configured default modal.
    pub fn close_modal(&mut self, id: Option<&str>) -> bool {
        let id = id.unwrap_or(&self.config.default_modal_id).to_string();
        self.modals.close(&mut self.dom, &id)
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    /// Shows a toast built from loosely typed page-script options.
    pub fn show_toast(&mut self, request: &ToastRequest) -> Option<ShownToast> {
        let options = request.resolve(&self.config.toast_defaults);
        self.show_toast_with(&options)
    }

    pub fn show_toast_with(&mut self, options: &ToastOptions) -> Option<ShownToast> {
        self.toasts.show(&mut self.dom, options)
    }

    /// Animation-frame callback for a shown toast.
    pub fn toast_entered(&mut self, id: ToastId) -> bool {
        self.toasts.entered(&mut self.dom, id)
    }

    /// Starts dismissing a toast. Safe to call repeatedly and after removal.
    pub fn hide_toast(&mut self, id: ToastId) -> bool {
        self.toasts.hide(&mut self.dom, id)
    }

    /// Routes a `transitionend` event; detaches the toast it belongs to if that toast is leaving.
    pub fn handle_transition_end(&mut self, target: ElementKey) -> bool {
        let toast = self
            .dom
            .closest(target, &markup::class_selector(markup::TOAST))
            .and_then(|element| self.toasts.find_by_element(element));
        match toast {
            Some(toast) => self.toasts.transition_finished(&mut self.dom, toast),
            None => false,
        }
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn disclosure(&self) -> &DisclosureController {
        &self.disclosure
    }

    pub fn accordions(&self) -> &AccordionController {
        &self.accordions
    }

    /// Runs the detection bootstrap with the configured marker class.
    pub fn detect(&mut self) -> Option<DetectionReport> {
        let marker = self.config.root_marker_class.clone();
        detect::detect(&mut self.dom, &marker)
    }

    fn toast_for_close_control(&mut self, target: ElementKey) -> Option<ToastId> {
        let close = self
            .dom
            .closest(target, &markup::class_selector(markup::TOAST_CLOSE))?;
        let toast = self
            .dom
            .closest(close, &markup::class_selector(markup::TOAST))?;
        self.toasts.find_by_element(toast)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::MemoryDom;
    use crate::toast::ToastPhase;

    fn toolkit() -> Toolkit<MemoryDom> {
        Toolkit::new(MemoryDom::new(), ToolkitConfig::default()).expect("toolkit")
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ToolkitConfig {
            root_marker_class: String::new(),
            ..ToolkitConfig::default()
        };
        assert!(Toolkit::new(MemoryDom::new(), config).is_err());

        let mut kit = toolkit();
        let bad = ToolkitConfig {
            detection_recheck_ms: 0,
            ..ToolkitConfig::default()
        };
        assert_eq!(kit.reconfigure(bad), Err(ConfigError::ZeroRecheckDelay));
        assert_eq!(kit.config(), &ToolkitConfig::default());
    }

    #[test]
    fn install_runs_once() {
        let mut kit = toolkit();
        assert!(kit.install());
        assert!(!kit.install());
        assert!(kit.is_installed());
    }

    #[test]
    fn default_modal_id_comes_from_config() {
        let mut kit = toolkit();
        let body = kit.dom_mut().body().expect("body");
        let modal = kit
            .dom_mut()
            .element_with_id(body, "div", "eg-ui-modal", "egModal");

        assert!(kit.open_modal(None));
        assert!(kit.modals().is_open(modal));
        assert_eq!(kit.handle_keydown("Escape"), 1);
        assert!(!kit.dom().scroll_locked());
    }

    #[test]
    fn auto_dismissed_toast_is_removed_after_its_transition() {
        let mut kit = toolkit();
        let request = ToastRequest {
            message: Some("Saved".into()),
            duration: Some(1_500),
            ..ToastRequest::default()
        };

        let shown = kit.show_toast(&request).expect("shown");
        assert_eq!(shown.auto_dismiss_ms, Some(1_500));
        assert!(kit.toast_entered(shown.id));

        // The host fires the timer after `auto_dismiss_ms`.
        assert!(kit.hide_toast(shown.id));
        assert!(kit.dom().is_connected(shown.element));
        assert!(kit.handle_transition_end(shown.element));
        assert!(!kit.dom().is_connected(shown.element));
    }

    #[test]
    fn closable_toast_is_only_removed_through_its_close_control() {
        let mut kit = toolkit();
        let request = ToastRequest {
            show_close: Some(true),
            duration: Some(10),
            ..ToastRequest::default()
        };
        let shown = kit.show_toast(&request).expect("shown");
        assert_eq!(shown.auto_dismiss_ms, None);
        kit.toast_entered(shown.id);

        assert!(!kit.handle_transition_end(shown.element));
        assert_eq!(kit.toasts().phase(shown.id), Some(ToastPhase::Visible));

        let close = kit
            .dom_mut()
            .query_all_within(shown.element, ".eg-ui-toast__close")[0];
        let outcome = kit.handle_click(close);
        assert!(outcome.handled);
        assert!(kit.handle_transition_end(shown.element));
        assert_eq!(kit.toasts().phase(shown.id), Some(ToastPhase::Removed));
    }

    #[test]
    fn tab_and_trigger_clicks_request_prevent_default() {
        let mut kit = toolkit();
        let body = kit.dom_mut().body().expect("body");
        let dom = kit.dom_mut();
        let nav = dom.element(body, "ul", "eg-ui-nav");
        let link = dom.element(nav, "a", "eg-ui-nav-link");
        dom.set_attribute(link, "data-eg-ui-toggle", "tab");
        dom.set_attribute(link, "href", "#pane");
        let content = dom.element(body, "div", "eg-ui-tab-content");
        let pane = dom.element_with_id(content, "div", "eg-ui-tab-pane", "pane");
        let plain = dom.element(body, "p", "");
        kit.install();

        let outcome = kit.handle_click(link);
        assert_eq!(
            outcome,
            ClickOutcome {
                prevent_default: true,
                handled: true,
            }
        );
        assert!(kit.dom().has_class(pane, "active"));
        assert_eq!(kit.handle_click(plain), ClickOutcome::default());
    }

    #[test]
    fn detection_uses_configured_marker() {
        let config = ToolkitConfig {
            root_marker_class: "has-eg-ui".into(),
            ..ToolkitConfig::default()
        };
        let mut kit = Toolkit::new(MemoryDom::new(), config).expect("toolkit");
        let report = kit.detect().expect("report");
        assert!(kit.dom().has_class(report.root, "has-eg-ui"));
    }
}
