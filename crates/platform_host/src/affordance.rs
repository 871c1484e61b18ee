//! UI affordances chosen per environment: native-command buttons or hyperlink fallbacks.

use crate::{Action, Environment};

/// Standard hyperlink used when no native bridge is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    /// Navigation target; always the action's path or URL verbatim.
    pub href: String,
    /// Visible link text.
    pub label: String,
}

impl Hyperlink {
    /// Builds the fallback link for `action`.
    pub fn for_action(action: &Action, label: impl Into<String>) -> Self {
        Self {
            href: action.target().to_string(),
            label: label.into(),
        }
    }

    /// Renders the link as an HTML anchor element.
    pub fn to_html(&self) -> String {
        format!(
            "<a href=\"{}\">{}</a>",
            escape_html(&self.href),
            escape_html(&self.label)
        )
    }
}

/// Control rendered for one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affordance {
    /// Button whose click dispatches `action` through the native bridge.
    Button {
        /// Visible button text.
        label: String,
        /// Action dispatched on click.
        action: Action,
    },
    /// Plain navigation link.
    Link(Hyperlink),
}

impl Affordance {
    /// Chooses the control for `action` under `environment`.
    ///
    /// `subject` names the target in the label, e.g. `"File"` or `"Google"`.
    pub fn for_action(environment: Environment, action: &Action, subject: &str) -> Self {
        match environment {
            Environment::Desktop => Self::Button {
                label: match action {
                    Action::OpenFile(_) => format!("Open {subject} from Tauri Desktop app"),
                    Action::OpenUrl(_) => format!("Open {subject} from Tauri Desktop"),
                },
                action: action.clone(),
            },
            Environment::Browser => {
                Self::Link(Hyperlink::for_action(action, format!("Open {subject} from web app")))
            }
        }
    }

    /// Visible text of the control.
    pub fn label(&self) -> &str {
        match self {
            Self::Button { label, .. } => label,
            Self::Link(link) => &link.label,
        }
    }

    /// Renders the control as HTML.
    pub fn to_html(&self) -> String {
        match self {
            Self::Button { label, action } => format!(
                "<button data-command=\"{}\">{}</button>",
                action.command(),
                escape_html(label)
            ),
            Self::Link(link) => link.to_html(),
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn browser_renders_anchor_with_verbatim_href() {
        let action = Action::open_url("https://www.google.com").expect("action");
        let affordance = Affordance::for_action(Environment::Browser, &action, "Google");

        assert_eq!(
            affordance.to_html(),
            "<a href=\"https://www.google.com\">Open Google from web app</a>"
        );
    }

    #[test]
    fn desktop_renders_button_carrying_the_action() {
        let action = Action::open_file("/tmp/a.jpg").expect("action");
        let affordance = Affordance::for_action(Environment::Desktop, &action, "File");

        assert_eq!(
            affordance,
            Affordance::Button {
                label: "Open File from Tauri Desktop app".to_string(),
                action,
            }
        );
        assert_eq!(
            affordance.to_html(),
            "<button data-command=\"open_file\">Open File from Tauri Desktop app</button>"
        );
    }

    #[test]
    fn desktop_url_button_label_has_no_app_suffix() {
        let action = Action::open_url("https://www.google.com").expect("action");
        let affordance = Affordance::for_action(Environment::Desktop, &action, "Google");

        assert_eq!(affordance.label(), "Open Google from Tauri Desktop");
        assert_eq!(
            affordance.to_html(),
            "<button data-command=\"open_url\">Open Google from Tauri Desktop</button>"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let action = Action::open_url("https://example.com/?a=1&b=\"2\"").expect("action");
        let link = Hyperlink::for_action(&action, "<x>");

        assert_eq!(
            link.to_html(),
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\">&lt;x&gt;</a>"
        );
        assert_eq!(link.href, action.target());
    }
}
