//! Logical UI actions routed through the dispatcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tauri command name for opening a local file with its default application.
pub const OPEN_FILE_COMMAND: &str = "open_file";
/// Tauri command name for opening a URL with the default browser.
pub const OPEN_URL_COMMAND: &str = "open_url";

/// Rejection for actions constructed with an empty target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("action target must not be empty")]
pub struct EmptyTarget;

/// A logical action requested by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Open a local file with the host's default application.
    OpenFile(String),
    /// Open a URL with the host's default browser.
    OpenUrl(String),
}

impl Action {
    /// Builds an open-file action.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTarget`] when `path` is empty or whitespace.
    pub fn open_file(path: impl Into<String>) -> Result<Self, EmptyTarget> {
        non_empty(path.into()).map(Self::OpenFile)
    }

    /// Builds an open-url action.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTarget`] when `url` is empty or whitespace.
    pub fn open_url(url: impl Into<String>) -> Result<Self, EmptyTarget> {
        non_empty(url.into()).map(Self::OpenUrl)
    }

    /// Path or URL the action points at.
    pub fn target(&self) -> &str {
        match self {
            Self::OpenFile(path) => path,
            Self::OpenUrl(url) => url,
        }
    }

    /// Native bridge command that services this action.
    pub const fn command(&self) -> &'static str {
        match self {
            Self::OpenFile(_) => OPEN_FILE_COMMAND,
            Self::OpenUrl(_) => OPEN_URL_COMMAND,
        }
    }
}

fn non_empty(target: String) -> Result<String, EmptyTarget> {
    if target.trim().is_empty() {
        Err(EmptyTarget)
    } else {
        Ok(target)
    }
}

/// IPC arguments for [`OPEN_FILE_COMMAND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenFileArgs {
    /// Absolute or host-relative file path.
    pub file_path: String,
}

/// IPC arguments for [`OPEN_URL_COMMAND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenUrlArgs {
    /// URL to hand to the default browser.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn constructors_reject_blank_targets() {
        assert_eq!(Action::open_file(""), Err(EmptyTarget));
        assert_eq!(Action::open_url("   "), Err(EmptyTarget));
        assert_eq!(
            Action::open_file("/tmp/a.jpg"),
            Ok(Action::OpenFile("/tmp/a.jpg".to_string()))
        );
    }

    #[test]
    fn target_and_command_follow_variant() {
        let file = Action::open_file("/tmp/a.jpg").expect("file action");
        let url = Action::open_url("https://www.google.com").expect("url action");

        assert_eq!(file.target(), "/tmp/a.jpg");
        assert_eq!(file.command(), "open_file");
        assert_eq!(url.target(), "https://www.google.com");
        assert_eq!(url.command(), "open_url");
    }

    #[test]
    fn open_file_args_use_camel_case_field() {
        let args = OpenFileArgs {
            file_path: "/tmp/a.jpg".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&args).expect("serialize"),
            json!({"filePath": "/tmp/a.jpg"})
        );
    }
}
