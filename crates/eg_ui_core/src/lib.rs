//! Target-independent core of the eg-ui widget toolkit.
//!
//! Each widget (modals, toasts, tabs, dropdowns/popovers, accordions) is a controller that owns
//! an explicit open-state register and projects it onto a document through [`DomBackend`].
//! [`Toolkit`] composes the controllers behind a single backend; the browser bridge lives in
//! `eg_ui_web`, and [`memory::MemoryDom`] provides a headless backend for tests.

#![warn(missing_debug_implementations)]

pub mod accordion;
pub mod bootstrap;
pub mod config;
pub mod detect;
pub mod disclosure;
pub mod dom;
pub mod markup;
pub mod memory;
pub mod modal;
pub mod register;
pub mod tabs;
pub mod toast;
pub mod toolkit;

pub use config::{ConfigError, ToastDefaults, ToolkitConfig};
pub use detect::{DetectionReport, DetectionSignal};
pub use dom::{DomBackend, ElementKey};
pub use toast::{
    ShownToast, ToastId, ToastKind, ToastOptions, ToastPhase, ToastPosition, ToastRequest,
};
pub use toolkit::{ClickOutcome, Toolkit};
