//! Tauri desktop shell hosting the link panel.
//!
//! Command registration stays localized here so the webview crates only depend on the command
//! names and payload shapes published by `platform_host`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

#[doc(hidden)]
pub mod open;

/// Starts the Tauri desktop host process.
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::new().build())
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![open::open_file, open::open_url])
        .run(tauri::generate_context!())
        .expect("desktop_tauri failed to run Tauri application");
}
