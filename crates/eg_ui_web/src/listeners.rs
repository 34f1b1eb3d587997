use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use crate::runtime::with_toolkit;

/// Attaches the document-level listeners for the lifetime of the page.
pub(crate) fn attach(document: &Document) {
    EventListener::new_with_options(
        document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            let outcome = with_toolkit(|toolkit| {
                let target = toolkit.dom_mut().event_target(event)?;
                Some(toolkit.handle_click(target))
            })
            .flatten();
            let Some(outcome) = outcome else {
                return;
            };
            if outcome.prevent_default {
                event.prevent_default();
            }
            if let Some(target) = event.target().filter(|_| outcome.handled) {
                console::debug!("eg-ui: click handled", target);
            }
        },
    )
    .forget();

    EventListener::new(document, "keydown", |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        let closed = with_toolkit(|toolkit| toolkit.handle_keydown(&key)).unwrap_or(0);
        if closed > 0 {
            console::debug!("eg-ui: modals closed by", key, closed);
        }
    })
    .forget();

    EventListener::new(document, "transitionend", |event| {
        with_toolkit(|toolkit| {
            if let Some(target) = toolkit.dom_mut().event_target(event) {
                toolkit.handle_transition_end(target);
            }
        });
    })
    .forget();
}
