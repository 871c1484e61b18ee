//! Tauri command bridge used by the webview-side [`NativeBridge`](platform_host::NativeBridge)
//! adapter.
//!
//! Command payloads are built here; the transport itself lives in `bridge::interop`, which
//! routes to the `wasm32` IPC glue or to a non-wasm fallback.

mod interop;

use platform_host::{
    DispatchError, OpenFileArgs, OpenUrlArgs, OPEN_FILE_COMMAND, OPEN_URL_COMMAND,
};

pub async fn open_file(path: &str) -> Result<(), DispatchError> {
    let args = OpenFileArgs {
        file_path: path.to_string(),
    };
    interop::invoke_command(OPEN_FILE_COMMAND, &args).await
}

pub async fn open_url(url: &str) -> Result<(), DispatchError> {
    let args = OpenUrlArgs {
        url: url.to_string(),
    };
    interop::invoke_command(OPEN_URL_COMMAND, &args).await
}

pub fn ipc_available() -> bool {
    interop::ipc_available()
}
