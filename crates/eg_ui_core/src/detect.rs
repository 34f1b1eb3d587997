//! Page-root marking for hosts that style against an "installed" class.
//!
//! The toolkit counts as installed whenever this code runs. The stylesheet and marker-class
//! heuristics below never gate that result; they are collected so a host can see which signals
//! were present when the check ran.

use crate::dom::{DomBackend, ElementKey};
use crate::markup;

/// Stylesheet `href` fragment that identifies toolkit CSS.
pub const STYLESHEET_HINT: &str = "eg-ui";

/// Marker classes whose presence indicates toolkit markup.
pub const MARKER_CLASSES: [&str; 5] = [
    markup::APP_CONTAINER,
    markup::MODAL,
    markup::NAV,
    markup::DROPDOWN,
    markup::ACCORDION,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionSignal {
    /// A stylesheet link whose `href` mentions the toolkit.
    Stylesheet(String),
    /// An element carrying one of [`MARKER_CLASSES`].
    MarkerClass(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionReport {
    /// Always `true`; kept explicit so callers do not mistake signals for the decision.
    pub installed: bool,
    /// Whether this run added the marker class (false if it was already present).
    pub marked: bool,
    pub root: ElementKey,
    pub signals: Vec<DetectionSignal>,
}

/// Marks the document root with `marker_class`.
///
/// Returns `None` while the document has no body yet; the host retries later.
pub fn detect<B: DomBackend>(dom: &mut B, marker_class: &str) -> Option<DetectionReport> {
    dom.body()?;
    let root = dom.root()?;

    let marked = !dom.has_class(root, marker_class);
    if marked {
        dom.add_class(root, marker_class);
    }

    Some(DetectionReport {
        installed: true,
        marked,
        root,
        signals: collect_signals(dom),
    })
}

fn collect_signals<B: DomBackend>(dom: &mut B) -> Vec<DetectionSignal> {
    let mut signals: Vec<DetectionSignal> = dom
        .stylesheet_hrefs()
        .into_iter()
        .filter(|href| href.contains(STYLESHEET_HINT))
        .map(DetectionSignal::Stylesheet)
        .collect();
    for class in MARKER_CLASSES {
        if dom.query_selector(&markup::class_selector(class)).is_some() {
            signals.push(DetectionSignal::MarkerClass(class));
        }
    }
    signals
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::MemoryDom;

    #[test]
    fn marks_root_once_and_reports_signals() {
        let mut dom = MemoryDom::new();
        let body = dom.body().expect("body");
        dom.element(body, "div", "eg-ui-modal");
        dom.add_stylesheet("/assets/eg-ui.min.css");
        dom.add_stylesheet("/assets/site.css");

        let first = detect(&mut dom, "eg-ui-installed").expect("report");
        assert!(first.installed);
        assert!(first.marked);
        assert_eq!(
            first.signals,
            vec![
                DetectionSignal::Stylesheet("/assets/eg-ui.min.css".into()),
                DetectionSignal::MarkerClass("eg-ui-modal"),
            ]
        );

        let second = detect(&mut dom, "eg-ui-installed").expect("report");
        assert!(!second.marked);
        assert!(dom.has_class(second.root, "eg-ui-installed"));
    }

    #[test]
    fn installed_without_any_signal() {
        let mut dom = MemoryDom::new();
        let report = detect(&mut dom, "eg-ui-installed").expect("report");
        assert!(report.installed);
        assert!(report.signals.is_empty());
    }

    #[test]
    fn waits_for_body() {
        let mut dom = MemoryDom::without_body();
        assert_eq!(detect(&mut dom, "eg-ui-installed"), None);

        dom.attach_body();
        assert!(detect(&mut dom, "eg-ui-installed").is_some());
    }
}
