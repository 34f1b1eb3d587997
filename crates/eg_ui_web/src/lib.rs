//! Browser (`wasm32`) host for the eg-ui widget toolkit.
//!
//! The controllers in [`eg_ui_core`] run against [`dom::WebDom`], a `web-sys` implementation of
//! [`eg_ui_core::DomBackend`]. A single toolkit instance lives in a thread-local slot; document
//! listeners forward `click`, `keydown` and `transitionend` events to it.
//!
//! Page scripts reach the toolkit through these exports:
//! - `start` (runs automatically when the module is instantiated)
//! - `installWithConfig(config)`
//! - `openModal(id?)` / `closeModal(id?)`
//! - `showToast(options)` / `hideToast(id)`
//!
//! On other targets the exports compile to inert stubs so the workspace builds natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod table;

#[cfg(target_arch = "wasm32")]
mod boot;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
mod runtime;
#[cfg(target_arch = "wasm32")]
mod toasts;

use wasm_bindgen::prelude::*;

/// Module entry point: installs the panic hook and schedules installation and detection.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        boot::schedule();
    }
}

/// Replaces the toolkit configuration and installs the controllers if the page is ready.
///
/// `undefined` and `null` select the defaults. Fields use camelCase names.
///
/// # Errors
///
/// Throws when the value does not deserialize or fails validation; the previous configuration
/// stays in effect.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(config: JsValue) -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        runtime::apply_config(config).map_err(|err| JsValue::from_str(&err))?;
        boot::install_when_ready();
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config;
        Ok(())
    }
}

/// Opens the modal with `id`, or the configured default modal. Returns whether one opened.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: Option<String>) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        runtime::with_toolkit(|toolkit| toolkit.open_modal(id.as_deref())).unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Closes the modal with `id`, or the configured default modal. Returns whether one closed.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: Option<String>) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        runtime::with_toolkit(|toolkit| toolkit.close_modal(id.as_deref())).unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Shows a toast and returns its id.
///
/// Accepts `{ message, type, position, duration, showClose }`; every field is optional and
/// unknown `type`/`position` values fall back to the configured defaults.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(options: JsValue) -> Option<u32> {
    #[cfg(target_arch = "wasm32")]
    {
        toasts::show(options)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = options;
        None
    }
}

/// Starts dismissing a toast. Unknown or already removed ids are ignored.
#[wasm_bindgen(js_name = hideToast)]
pub fn hide_toast(id: u32) {
    #[cfg(target_arch = "wasm32")]
    toasts::hide(eg_ui_core::ToastId(id));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}
