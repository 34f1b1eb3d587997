//! Load-time scheduling for controller installation and the detection bootstrap.

/// `document.readyState` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parses `document.readyState`; unrecognized values are treated as still loading.
    pub fn from_document(value: &str) -> Self {
        match value {
            "interactive" => Self::Interactive,
            "complete" => Self::Complete,
            _ => Self::Loading,
        }
    }

    /// Whether `DOMContentLoaded` has already fired.
    pub fn structure_ready(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// When a deferred piece of bootstrap work should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAt {
    Now,
    ContentLoaded,
    AfterDelay(u32),
}

/// Controllers attach listeners once the page structure is ready.
pub fn install_at(ready: ReadyState) -> RunAt {
    if ready.structure_ready() {
        RunAt::Now
    } else {
        RunAt::ContentLoaded
    }
}

/// Every point at which the detection check runs.
///
/// The check runs immediately if the body exists, again after `DOMContentLoaded` when that has
/// not fired yet, and a final time after `recheck_ms` to catch stylesheets injected late.
pub fn detection_runs(ready: ReadyState, body_present: bool, recheck_ms: u32) -> Vec<RunAt> {
    let mut runs = Vec::with_capacity(3);
    if body_present {
        runs.push(RunAt::Now);
    }
    if !ready.structure_ready() {
        runs.push(RunAt::ContentLoaded);
    }
    runs.push(RunAt::AfterDelay(recheck_ms));
    runs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn loading_document_defers_to_content_loaded() {
        assert_eq!(install_at(ReadyState::from_document("loading")), RunAt::ContentLoaded);
        assert_eq!(
            detection_runs(ReadyState::Loading, false, 1_000),
            vec![RunAt::ContentLoaded, RunAt::AfterDelay(1_000)]
        );
        assert_eq!(
            detection_runs(ReadyState::Loading, true, 1_000),
            vec![RunAt::Now, RunAt::ContentLoaded, RunAt::AfterDelay(1_000)]
        );
    }

    #[test]
    fn ready_document_runs_now_and_rechecks_later() {
        assert_eq!(install_at(ReadyState::from_document("complete")), RunAt::Now);
        assert_eq!(
            detection_runs(ReadyState::Interactive, true, 250),
            vec![RunAt::Now, RunAt::AfterDelay(250)]
        );
    }

    #[test]
    fn unknown_ready_state_is_treated_as_loading() {
        assert_eq!(ReadyState::from_document("prerender"), ReadyState::Loading);
    }
}
