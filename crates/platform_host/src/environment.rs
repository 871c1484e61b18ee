//! Runtime environment detection for desktop-shell versus plain-browser composition.

/// Substring the desktop shell places in the webview's identifying string.
pub const DESKTOP_SHELL_MARKER: &str = "Tauri";

/// Runtime the UI is hosted in, derived once per page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Native desktop shell with a reachable command bridge.
    Desktop,
    /// Plain browser; actions fall back to hyperlink navigation.
    Browser,
}

impl Environment {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Browser => "browser",
        }
    }

    /// Returns whether actions should be routed through the native bridge.
    pub const fn uses_native_bridge(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the runtime's identifying string (for webviews, the navigator user agent).
pub trait EnvironmentProbe {
    /// Returns the identifying string, or `None` when the runtime exposes none.
    fn identity(&self) -> Option<String>;
}

/// Probe returning a fixed identifying string; useful for tests and headless composition.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe(pub Option<String>);

impl EnvironmentProbe for StaticProbe {
    fn identity(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Classifies an identifying string.
pub fn detect_environment(user_agent: &str) -> Environment {
    if user_agent.contains(DESKTOP_SHELL_MARKER) {
        Environment::Desktop
    } else {
        Environment::Browser
    }
}

/// Detects the environment from a probe. A missing identity is treated as [`Environment::Browser`].
pub fn detect(probe: &dyn EnvironmentProbe) -> Environment {
    probe
        .identity()
        .map_or(Environment::Browser, |ua| detect_environment(&ua))
}
