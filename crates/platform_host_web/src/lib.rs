//! Webview implementations of the [`platform_host`] dispatch contracts.
//!
//! This crate probes the hosting webview, selects the matching native bridge and mounts the
//! link panel. Transport is split under `bridge/`:
//! - `bridge` builds the `open_file` / `open_url` command payloads
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-environment selection and concrete bridge factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod environment;
pub mod panel;
pub mod tauri_bridge;

pub use adapters::{
    build_dispatcher, dispatcher_for, native_bridge, NativeBridgeAdapter,
};
pub use environment::{selected_environment, NavigatorProbe};
#[cfg(target_arch = "wasm32")]
pub use panel::mount_link_panel;
pub use panel::{LinkPanel, PanelEntry, PANEL_TITLE};
pub use tauri_bridge::TauriBridge;

/// Installs the browser console logger once; later calls are no-ops.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| wasm_logger::init(wasm_logger::Config::default()));
    }
}
