use std::cell::RefCell;

use eg_ui_core::{Toolkit, ToolkitConfig};
use gloo::console;
use wasm_bindgen::JsValue;

use crate::dom::WebDom;

thread_local! {
    static TOOLKIT: RefCell<Option<Toolkit<WebDom>>> = RefCell::new(None);
}

/// Runs `f` against the page's toolkit, creating it with the default configuration on first use.
///
/// Returns `None` when there is no document or when called re-entrantly from inside `f`.
pub(crate) fn with_toolkit<R>(f: impl FnOnce(&mut Toolkit<WebDom>) -> R) -> Option<R> {
    TOOLKIT.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            console::warn!("eg-ui: toolkit re-entered; call dropped");
            return None;
        };
        if slot.is_none() {
            *slot = Some(create()?);
        }
        slot.as_mut().map(f)
    })
}

/// Decodes a page-supplied config object and swaps it in.
pub(crate) fn apply_config(value: JsValue) -> Result<(), String> {
    let config: ToolkitConfig = if value.is_undefined() || value.is_null() {
        ToolkitConfig::default()
    } else {
        serde_wasm_bindgen::from_value(value).map_err(|e| format!("invalid eg-ui config: {e}"))?
    };
    with_toolkit(|toolkit| toolkit.reconfigure(config))
        .ok_or_else(|| "eg-ui toolkit unavailable".to_string())?
        .map_err(|e| e.to_string())
}

fn create() -> Option<Toolkit<WebDom>> {
    let dom = WebDom::from_window()?;
    match Toolkit::new(dom, ToolkitConfig::default()) {
        Ok(toolkit) => Some(toolkit),
        Err(err) => {
            console::error!("eg-ui: default config rejected", err.to_string());
            None
        }
    }
}
