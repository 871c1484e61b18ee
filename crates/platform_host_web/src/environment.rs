//! Webview environment probing.

use platform_host::{Environment, EnvironmentProbe};

#[derive(Debug, Clone, Copy, Default)]
/// Probe reading `window.navigator.userAgent`; reports no identity outside `wasm32`.
pub struct NavigatorProbe;

impl EnvironmentProbe for NavigatorProbe {
    fn identity(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window().and_then(|window| window.navigator().user_agent().ok());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

/// Returns the environment for this page load.
///
/// With the `desktop-host-tauri` feature the desktop environment is selected at compile time;
/// otherwise the navigator user agent is probed on first call and the answer is kept.
pub fn selected_environment() -> Environment {
    #[cfg(feature = "desktop-host-tauri")]
    {
        Environment::Desktop
    }

    #[cfg(not(feature = "desktop-host-tauri"))]
    {
        use std::sync::OnceLock;

        static DETECTED: OnceLock<Environment> = OnceLock::new();
        *DETECTED.get_or_init(|| {
            let environment = platform_host::detect(&NavigatorProbe);
            log::debug!("detected {environment} environment");
            environment
        })
    }
}
