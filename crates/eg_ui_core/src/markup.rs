//! Class and attribute names shared between the widget controllers and host page markup.
//!
//! Every selector the toolkit queries and every marker class it toggles is named here so the
//! style contract and the scripting contract cannot drift apart.

/// Application container; toast stacks attach here when present, otherwise to `<body>`.
pub const APP_CONTAINER: &str = "eg-ui-app";
/// Marker class the detection bootstrap adds to the document root element.
pub const ROOT_MARKER: &str = "eg-ui-installed";

/// Generic state class shared by tabs, panes, and accordion items.
pub const ACTIVE: &str = "active";

pub const MODAL: &str = "eg-ui-modal";
pub const MODAL_OVERLAY: &str = "eg-ui-modal__overlay";
pub const MODAL_OPEN: &str = "eg-ui-modal--open";
pub const DEFAULT_MODAL_ID: &str = "egModal";

pub const TOAST_CONTAINER: &str = "eg-ui-toast-container";
pub const TOAST: &str = "eg-ui-toast";
pub const TOAST_INNER: &str = "eg-ui-toast__inner";
pub const TOAST_ICON: &str = "eg-ui-toast__icon";
pub const TOAST_MESSAGE: &str = "eg-ui-toast__message";
pub const TOAST_CLOSE: &str = "eg-ui-toast__close";
pub const TOAST_SHOW: &str = "eg-ui-toast--show";
/// Text of the toast dismiss control (`&times;`).
pub const TOAST_CLOSE_GLYPH: &str = "\u{00d7}";

pub const TOGGLE_ATTR: &str = "data-eg-ui-toggle";
pub const TARGET_ATTR: &str = "data-target";
pub const TAB_TOGGLE: &str = "[data-eg-ui-toggle=\"tab\"]";
pub const NAV: &str = "eg-ui-nav";
pub const NAV_LINK: &str = "eg-ui-nav-link";
pub const TAB_CONTENT: &str = "eg-ui-tab-content";
pub const TAB_PANE: &str = "eg-ui-tab-pane";
pub const ARIA_SELECTED: &str = "aria-selected";

pub const POPOVER_TOGGLE: &str = "[data-eg-ui-toggle=\"popover\"]";
pub const POPOVER: &str = "eg-ui-popover";
pub const POPOVER_OPEN: &str = "eg-ui-popover--open";

pub const DROPDOWN_TOGGLE: &str = "[data-eg-ui-toggle=\"dropdown\"]";
pub const DROPDOWN: &str = "eg-ui-dropdown";
pub const DROPDOWN_ITEM: &str = "eg-ui-dropdown-item";
pub const DROPDOWN_OPEN: &str = "eg-ui-dropdown--open";

pub const ACCORDION: &str = "eg-ui-accordion";
pub const ACCORDION_ITEM: &str = "eg-ui-accordion-item";
pub const ACCORDION_HEADER: &str = "eg-ui-accordion-header";
pub const ACCORDION_COLLAPSE: &str = "eg-ui-accordion-collapse";
/// Presence on an accordion root allows several items to stay open.
pub const ACCORDION_ALWAYS_OPEN: &str = "data-eg-ui-always-open";

/// Builds a class selector (`.name`) from a bare class name.
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}

/// Normalizes a trigger reference (`#panel`, `panel`, or `/page#panel`) to a bare element id.
///
/// Returns `None` for empty references and bare `#`.
pub fn fragment_id(reference: &str) -> Option<&str> {
    let reference = reference.trim();
    let id = match reference.rfind('#') {
        Some(idx) => &reference[idx + 1..],
        None => reference,
    };
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_id_accepts_hash_bare_and_url_forms() {
        assert_eq!(fragment_id("#menu"), Some("menu"));
        assert_eq!(fragment_id("menu"), Some("menu"));
        assert_eq!(fragment_id("/docs/page#menu"), Some("menu"));
        assert_eq!(fragment_id(" #menu "), Some("menu"));
    }

    #[test]
    fn fragment_id_rejects_empty_references() {
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/page#"), None);
    }
}
