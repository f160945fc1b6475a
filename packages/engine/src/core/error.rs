//! Error types for the dice tray.
//!
//! Only configuration problems are surfaced to callers. An unmounted or torn
//! down scene turns mutating commands into silent no-ops instead.

use thiserror::Error;

use crate::domain::dice::DieKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrayError {
    /// Die kind name did not match any known kind.
    #[error("unknown die kind: {0}")]
    UnknownKind(String),

    /// No style registered under this name.
    #[error("unknown die style: {0}")]
    UnknownStyle(String),

    /// The style exists but has no body for the requested kind.
    #[error("style {style} has no instance for {kind}")]
    StyleMissingKind { style: String, kind: DieKind },

    /// Config or style JSON failed to parse or validate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scene handles are not mounted or were torn down.
    #[error("scene is not available")]
    SceneUnavailable,
}

impl From<serde_json::Error> for TrayError {
    fn from(e: serde_json::Error) -> Self {
        TrayError::InvalidConfig(e.to_string())
    }
}
