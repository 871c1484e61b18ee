//! Typed failure taxonomy shared by the dispatcher and the native command handlers.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the native bridge for a dispatched action.
///
/// The enum serializes as an internally tagged object (`{"kind": "not_found"}`,
/// `{"kind": "unknown", "message": "..."}`) so desktop command handlers can return it directly
/// and the webview side can decode it from an IPC rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispatchError {
    /// The target file path does not exist.
    #[error("target not found")]
    NotFound,
    /// The host refused access to the target.
    #[error("permission denied")]
    PermissionDenied,
    /// The native bridge could not be reached from the current runtime.
    #[error("native bridge unavailable")]
    BridgeUnavailable,
    /// Any other native-side failure.
    #[error("{message}")]
    Unknown {
        /// Host-provided diagnostic text.
        message: String,
    },
}

impl DispatchError {
    /// Builds an [`DispatchError::Unknown`] from any displayable message.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Maps an I/O failure onto the dispatch taxonomy.
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::unknown(err.to_string()),
        }
    }

    /// Decodes a bridge rejection payload.
    ///
    /// Structured payloads produced by the desktop handlers decode to their variant; any other
    /// text is preserved verbatim as [`DispatchError::Unknown`].
    pub fn from_bridge_message(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self::unknown(raw))
    }

    /// Returns a stable token for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::PermissionDenied => "permission_denied",
            Self::BridgeUnavailable => "bridge_unavailable",
            Self::Unknown { .. } => "unknown",
        }
    }
}
