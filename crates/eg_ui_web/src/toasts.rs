//! Timer and animation-frame scheduling for toasts shown from page scripts.

use eg_ui_core::{ShownToast, ToastId, ToastRequest};
use gloo::console;
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::runtime::with_toolkit;

pub(crate) fn show(options: JsValue) -> Option<u32> {
    let request = parse_request(options);
    let shown = with_toolkit(|toolkit| toolkit.show_toast(&request)).flatten()?;
    schedule(shown);
    Some(shown.id.0)
}

pub(crate) fn hide(id: ToastId) {
    with_toolkit(|toolkit| toolkit.hide_toast(id));
}

fn parse_request(options: JsValue) -> ToastRequest {
    if options.is_undefined() || options.is_null() {
        return ToastRequest::default();
    }
    serde_wasm_bindgen::from_value(options).unwrap_or_else(|err| {
        console::warn!("eg-ui: ignoring malformed toast options", err.to_string());
        ToastRequest::default()
    })
}

fn schedule(shown: ShownToast) {
    let id = shown.id;
    let entered = Closure::once_into_js(move || {
        with_toolkit(|toolkit| toolkit.toast_entered(id));
    });
    let callback = entered.unchecked_ref::<js_sys::Function>();
    let requested = web_sys::window()
        .is_some_and(|window| window.request_animation_frame(callback).is_ok());
    if !requested {
        with_toolkit(|toolkit| toolkit.toast_entered(id));
    }

    if let Some(delay) = shown.auto_dismiss_ms {
        Timeout::new(delay, move || hide(id)).forget();
    }
}
