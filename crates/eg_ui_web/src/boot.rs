//! Load-time wiring: controller installation and the detection bootstrap.

use eg_ui_core::bootstrap::{detection_runs, install_at, ReadyState, RunAt};
use eg_ui_core::config::DEFAULT_DETECTION_RECHECK_MS;
use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::Document;

use crate::listeners;
use crate::runtime::with_toolkit;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn ready_state(document: &Document) -> ReadyState {
    ReadyState::from_document(&document.ready_state())
}

/// Installs now or on `DOMContentLoaded`, then schedules every detection run.
pub(crate) fn schedule() {
    let Some(document) = document() else {
        console::warn!("eg-ui: no document; toolkit not started");
        return;
    };
    install_when_ready();

    let ready = ready_state(&document);
    let recheck_ms = with_toolkit(|toolkit| toolkit.config().detection_recheck_ms)
        .unwrap_or(DEFAULT_DETECTION_RECHECK_MS);
    for run in detection_runs(ready, document.body().is_some(), recheck_ms) {
        at(&document, run, run_detection);
    }
}

/// Installs the controllers once the page structure exists. Repeat calls are no-ops.
pub(crate) fn install_when_ready() {
    let Some(document) = document() else {
        return;
    };
    at(&document, install_at(ready_state(&document)), install);
}

fn at(document: &Document, run: RunAt, task: fn()) {
    match run {
        RunAt::Now => task(),
        RunAt::ContentLoaded => {
            EventListener::once(document, "DOMContentLoaded", move |_| task()).forget();
        }
        RunAt::AfterDelay(ms) => Timeout::new(ms, task).forget(),
    }
}

fn install() {
    if with_toolkit(|toolkit| toolkit.install()) != Some(true) {
        return;
    }
    if let Some(document) = document() {
        listeners::attach(&document);
    }
    console::debug!("eg-ui: controllers installed");
}

fn run_detection() {
    let Some(report) = with_toolkit(|toolkit| toolkit.detect()).flatten() else {
        return;
    };
    console::debug!(
        "eg-ui: detection",
        if report.marked { "marked root" } else { "root already marked" },
        format!("{:?}", report.signals)
    );
}
