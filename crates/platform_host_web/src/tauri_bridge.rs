//! Native bridge adapter for the Tauri desktop webview.

use platform_host::{BridgeFuture, DispatchError, NativeBridge};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Desktop-webview bridge backed by the `open_file` / `open_url` Tauri commands.
pub struct TauriBridge;

impl TauriBridge {
    /// Returns whether the Tauri IPC global is reachable from this context.
    pub fn is_reachable(&self) -> bool {
        bridge::ipc_available()
    }
}

impl NativeBridge for TauriBridge {
    fn open_file<'a>(&'a self, path: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>> {
        Box::pin(async move { bridge::open_file(path).await })
    }

    fn open_url<'a>(&'a self, url: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>> {
        Box::pin(async move { bridge::open_url(url).await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::Action;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_tauri_bridge_matches_interop_fallback() {
        let bridge = TauriBridge;
        let bridge_obj: &dyn NativeBridge = &bridge;
        let action = Action::open_file("/tmp/a.jpg").expect("action");

        assert!(!bridge.is_reachable());
        assert_eq!(
            block_on(bridge_obj.invoke(&action)),
            Err(DispatchError::BridgeUnavailable)
        );
    }
}
