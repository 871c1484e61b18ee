//! Shared transport interop for Tauri IPC commands.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the command helpers in `bridge`.

use platform_host::DispatchError;
use serde::Serialize;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn invoke_command<A: Serialize>(command: &str, args: &A) -> Result<(), DispatchError> {
    imp::invoke_command(command, args).await
}

pub fn ipc_available() -> bool {
    imp::ipc_available()
}
