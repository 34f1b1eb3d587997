//! Toolkit configuration supplied by the host page.

use serde::Deserialize;
use thiserror::Error;

use crate::markup;
use crate::toast::{ToastKind, ToastPosition};

/// Default delay before the detection bootstrap re-checks the page.
pub const DEFAULT_DETECTION_RECHECK_MS: u32 = 1_000;
/// Default toast auto-dismiss delay.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected configuration values.
pub enum ConfigError {
    /// A required identifier or class name was blank.
    #[error("`{field}` must not be empty")]
    Empty {
        /// Offending field name.
        field: &'static str,
    },
    /// The detection re-check delay was zero.
    #[error("`detectionRecheckMs` must be greater than zero")]
    ZeroRecheckDelay,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Defaults applied to toast options the caller leaves out.
pub struct ToastDefaults {
    #[serde(rename = "type")]
    pub kind: ToastKind,
    pub position: ToastPosition,
    pub duration: u32,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            kind: ToastKind::Info,
            position: ToastPosition::TopRight,
            duration: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Host-tunable toolkit settings. Every field is optional when deserialized.
pub struct ToolkitConfig {
    /// Modal id used when `openModal`/`closeModal` are called without one.
    pub default_modal_id: String,
    pub toast_defaults: ToastDefaults,
    /// Delay before the final detection re-check.
    pub detection_recheck_ms: u32,
    /// Class the detection bootstrap adds to the document root.
    pub root_marker_class: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            default_modal_id: markup::DEFAULT_MODAL_ID.to_string(),
            toast_defaults: ToastDefaults::default(),
            detection_recheck_ms: DEFAULT_DETECTION_RECHECK_MS,
            root_marker_class: markup::ROOT_MARKER.to_string(),
        }
    }
}

impl ToolkitConfig {
    /// Checks semantic constraints that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for blank ids/class names or a zero re-check delay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_modal_id.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "defaultModalId",
            });
        }
        if self.root_marker_class.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "rootMarkerClass",
            });
        }
        if self.detection_recheck_ms == 0 {
            return Err(ConfigError::ZeroRecheckDelay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let config: ToolkitConfig = serde_json::from_str(
            r#"{ "defaultModalId": "signup", "toastDefaults": { "position": "bottom-left" } }"#,
        )
        .expect("parse config");

        assert_eq!(config.default_modal_id, "signup");
        assert_eq!(config.toast_defaults.position, ToastPosition::BottomLeft);
        assert_eq!(config.toast_defaults.kind, ToastKind::Info);
        assert_eq!(config.toast_defaults.duration, DEFAULT_TOAST_DURATION_MS);
        assert_eq!(config.detection_recheck_ms, DEFAULT_DETECTION_RECHECK_MS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_identifiers_and_zero_delay() {
        let config = ToolkitConfig {
            default_modal_id: "  ".into(),
            ..ToolkitConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Empty {
                field: "defaultModalId"
            })
        );

        let config = ToolkitConfig {
            detection_recheck_ms: 0,
            ..ToolkitConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRecheckDelay));
    }
}
