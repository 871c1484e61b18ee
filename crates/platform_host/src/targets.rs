//! Caller-supplied launch targets for the link panel.

use serde::Deserialize;
use thiserror::Error;

use crate::{Action, EmptyTarget};

/// Errors raised while loading [`LaunchTargets`].
#[derive(Debug, Error)]
pub enum LaunchTargetsError {
    /// The JSON document could not be parsed.
    #[error("invalid launch targets: {0}")]
    Parse(#[from] serde_json::Error),
    /// A target field was present but blank.
    #[error("launch target `{field}` is empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// File and URL targets rendered by the link panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaunchTargets {
    /// Local file opened by the file affordance.
    pub file_path: String,
    /// URL opened by the URL affordance.
    pub url: String,
    /// Name shown in the URL affordance label; defaults to `"URL"`.
    #[serde(default)]
    pub url_label: Option<String>,
}

impl LaunchTargets {
    /// Parses and validates targets from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchTargetsError`] for malformed JSON or blank targets.
    pub fn from_json_str(raw: &str) -> Result<Self, LaunchTargetsError> {
        let targets: Self = serde_json::from_str(raw)?;
        targets.actions()?;
        Ok(targets)
    }

    /// Returns `(subject, action)` pairs in render order: file first, then URL.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchTargetsError::Empty`] when a target is blank.
    pub fn actions(&self) -> Result<Vec<(String, Action)>, LaunchTargetsError> {
        let file = Action::open_file(self.file_path.as_str())
            .map_err(|EmptyTarget| LaunchTargetsError::Empty { field: "file_path" })?;
        let url = Action::open_url(self.url.as_str())
            .map_err(|EmptyTarget| LaunchTargetsError::Empty { field: "url" })?;
        let url_subject = self.url_label.clone().unwrap_or_else(|| "URL".to_string());
        Ok(vec![("File".to_string(), file), (url_subject, url)])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_targets_and_orders_actions() {
        let targets = LaunchTargets::from_json_str(
            r#"{"file_path": "/tmp/a.jpg", "url": "https://www.google.com", "url_label": "Google"}"#,
        )
        .expect("parse");

        assert_eq!(
            targets.actions().expect("actions"),
            vec![
                ("File".to_string(), Action::OpenFile("/tmp/a.jpg".to_string())),
                (
                    "Google".to_string(),
                    Action::OpenUrl("https://www.google.com".to_string())
                ),
            ]
        );
    }

    #[test]
    fn missing_label_defaults_to_url() {
        let targets =
            LaunchTargets::from_json_str(r#"{"file_path": "/tmp/a.jpg", "url": "https://x.dev"}"#)
                .expect("parse");
        assert_eq!(targets.actions().expect("actions")[1].0, "URL");
    }

    #[test]
    fn blank_target_is_rejected() {
        let err = LaunchTargets::from_json_str(r#"{"file_path": " ", "url": "https://x.dev"}"#)
            .expect_err("blank path");
        assert_eq!(err.to_string(), "launch target `file_path` is empty");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = LaunchTargets::from_json_str("{").expect_err("malformed");
        assert!(matches!(err, LaunchTargetsError::Parse(_)));
    }
}
