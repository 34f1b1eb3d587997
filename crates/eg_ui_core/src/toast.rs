//! Transient toast notifications stacked in lazily created, per-position containers.
//!
//! Each toast moves through [`ToastPhase`] in one direction only. Every entry point checks the
//! current phase first, so a stale auto-dismiss timer, a second click on the close control, or a
//! late animation frame are all harmless.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::config::ToastDefaults;
use crate::dom::{DomBackend, ElementKey};
use crate::markup;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown toast type `{0}`")]
    UnknownKind(String),
    #[error("unknown toast position `{0}`")]
    UnknownPosition(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Toast style variant; selects the icon glyph and modifier class.
pub enum ToastKind {
    Success,
    #[default]
    Info,
    Warning,
    Danger,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Info => "\u{2139}",
            Self::Warning => "\u{26a0}",
            Self::Danger => "\u{2715}",
        }
    }

    /// Full `class` attribute for a toast of this kind.
    pub fn class_name(self) -> String {
        format!("{} {}--{}", markup::TOAST, markup::TOAST, self.as_str())
    }
}

impl FromStr for ToastKind {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "success" => Ok(Self::Success),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            other => Err(ParseError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Page placement of a toast stack.
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    TopCenter,
    BottomRight,
    BottomLeft,
    BottomCenter,
}

impl ToastPosition {
    pub const ALL: [Self; 6] = [
        Self::TopRight,
        Self::TopLeft,
        Self::TopCenter,
        Self::BottomRight,
        Self::BottomLeft,
        Self::BottomCenter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
        }
    }

    /// Full `class` attribute for this position's container.
    pub fn container_class(self) -> String {
        format!(
            "{} {}--{}",
            markup::TOAST_CONTAINER,
            markup::TOAST_CONTAINER,
            self.as_str()
        )
    }
}

impl FromStr for ToastPosition {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == value)
            .ok_or_else(|| ParseError::UnknownPosition(value.to_string()))
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Loosely typed `showToast` options as received from page scripts.
///
/// Unknown `type`/`position` names fall back to the configured defaults instead of failing.
pub struct ToastRequest {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub position: Option<String>,
    pub duration: Option<u32>,
    pub show_close: Option<bool>,
}

impl ToastRequest {
    pub fn resolve(&self, defaults: &ToastDefaults) -> ToastOptions {
        ToastOptions {
            message: self.message.clone().unwrap_or_default(),
            kind: self
                .kind
                .as_deref()
                .and_then(|kind| kind.parse().ok())
                .unwrap_or(defaults.kind),
            position: self
                .position
                .as_deref()
                .and_then(|position| position.parse().ok())
                .unwrap_or(defaults.position),
            duration_ms: self.duration.unwrap_or(defaults.duration),
            show_close: self.show_close.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully resolved toast options.
pub struct ToastOptions {
    pub message: String,
    pub kind: ToastKind,
    pub position: ToastPosition,
    pub duration_ms: u32,
    /// Render a dismiss control and disable auto-dismiss.
    pub show_close: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        ToastRequest::default().resolve(&ToastDefaults::default())
    }
}

impl ToastOptions {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached, waiting for the next animation frame to become visible.
    Entering,
    Visible,
    /// Exit transition running; removed once it ends.
    Leaving,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A freshly attached toast and the follow-up callbacks the host must schedule.
pub struct ShownToast {
    pub id: ToastId,
    pub element: ElementKey,
    /// Delay after which the host should call [`ToastManager::hide`], if any.
    pub auto_dismiss_ms: Option<u32>,
}

#[derive(Debug, Clone)]
struct ToastRecord {
    element: ElementKey,
    /// Every element created for this toast, root first.
    parts: Vec<ElementKey>,
    position: ToastPosition,
    phase: ToastPhase,
}

#[derive(Debug, Clone, Default)]
pub struct ToastManager {
    containers: BTreeMap<ToastPosition, ElementKey>,
    toasts: BTreeMap<ToastId, ToastRecord>,
    next_id: u32,
}

impl ToastManager {
    /// Appends a toast to its position's container, creating the container on first use.
    ///
    /// Returns `None` when the document has no body to attach to yet.
    pub fn show<B: DomBackend>(
        &mut self,
        dom: &mut B,
        options: &ToastOptions,
    ) -> Option<ShownToast> {
        let container = self.container(dom, options.position)?;
        let element = dom.create_element("div", &options.kind.class_name())?;

        let inner = dom.create_element("div", markup::TOAST_INNER)?;
        let icon = dom.create_element("span", markup::TOAST_ICON)?;
        dom.set_text(icon, options.kind.icon());
        let message = dom.create_element("span", markup::TOAST_MESSAGE)?;
        dom.set_text(message, &options.message);
        dom.append_child(inner, icon);
        dom.append_child(inner, message);
        dom.append_child(element, inner);
        let mut parts = vec![element, inner, icon, message];

        if options.show_close {
            let close = dom.create_element("button", markup::TOAST_CLOSE)?;
            dom.set_attribute(close, "aria-label", "Close");
            dom.set_text(close, markup::TOAST_CLOSE_GLYPH);
            dom.append_child(element, close);
            parts.push(close);
        }

        dom.append_child(container, element);

        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.insert(
            id,
            ToastRecord {
                element,
                parts,
                position: options.position,
                phase: ToastPhase::Entering,
            },
        );

        Some(ShownToast {
            id,
            element,
            auto_dismiss_ms: (!options.show_close).then_some(options.duration_ms),
        })
    }

    /// Animation-frame callback: makes an entering toast visible.
    pub fn entered<B: DomBackend>(&mut self, dom: &mut B, id: ToastId) -> bool {
        let Some(record) = self.toasts.get_mut(&id) else {
            return false;
        };
        if record.phase != ToastPhase::Entering {
            return false;
        }
        dom.add_class(record.element, markup::TOAST_SHOW);
        record.phase = ToastPhase::Visible;
        true
    }

    /// Starts the exit transition. Returns `false` if the toast was already leaving or gone.
    ///
    /// A toast that never became visible, or whose element was detached by someone else, is
    /// removed immediately: no exit transition will ever end for it.
    pub fn hide<B: DomBackend>(&mut self, dom: &mut B, id: ToastId) -> bool {
        let Some((phase, element)) = self.toasts.get(&id).map(|r| (r.phase, r.element)) else {
            return false;
        };
        match phase {
            ToastPhase::Leaving | ToastPhase::Removed => return false,
            ToastPhase::Visible if dom.is_connected(element) => {
                dom.remove_class(element, markup::TOAST_SHOW);
                if let Some(record) = self.toasts.get_mut(&id) {
                    record.phase = ToastPhase::Leaving;
                }
            }
            ToastPhase::Entering | ToastPhase::Visible => self.retire(dom, id),
        }
        true
    }

    /// Transition-end callback: detaches a leaving toast. Other phases are ignored.
    pub fn transition_finished<B: DomBackend>(&mut self, dom: &mut B, id: ToastId) -> bool {
        let leaving = self
            .toasts
            .get(&id)
            .is_some_and(|record| record.phase == ToastPhase::Leaving);
        if leaving {
            self.retire(dom, id);
        }
        leaving
    }

    /// Detaches the toast and hands its element keys back to the backend.
    fn retire<B: DomBackend>(&mut self, dom: &mut B, id: ToastId) {
        let Some(record) = self.toasts.remove(&id) else {
            return;
        };
        dom.remove_element(record.element);
        for part in record.parts {
            dom.release(part);
        }
    }

    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        match self.toasts.get(&id) {
            Some(record) => Some(record.phase),
            None if id.0 < self.next_id => Some(ToastPhase::Removed),
            None => None,
        }
    }

    /// Live toast owning `element`.
    pub fn find_by_element(&self, element: ElementKey) -> Option<ToastId> {
        self.toasts
            .iter()
            .find(|(_, record)| record.element == element)
            .map(|(id, _)| *id)
    }

    /// Live toasts at `position`, oldest first.
    pub fn live_at(&self, position: ToastPosition) -> Vec<ToastId> {
        self.toasts
            .iter()
            .filter(|(_, record)| record.position == position)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Cached container for `position`, if one has been created.
    pub fn container_for(&self, position: ToastPosition) -> Option<ElementKey> {
        self.containers.get(&position).copied()
    }

    fn container<B: DomBackend>(
        &mut self,
        dom: &mut B,
        position: ToastPosition,
    ) -> Option<ElementKey> {
        if let Some(container) = self.containers.get(&position) {
            return Some(*container);
        }
        let host = dom
            .query_selector(&markup::class_selector(markup::APP_CONTAINER))
            .or_else(|| dom.body())?;
        let container = dom.create_element("div", &position.container_class())?;
        dom.append_child(host, container);
        self.containers.insert(position, container);
        Some(container)
    }
}
