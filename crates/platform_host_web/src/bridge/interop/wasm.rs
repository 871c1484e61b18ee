use super::*;
use js_sys::Promise;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
function internals() {
  if (typeof window === 'undefined') return null;
  const ipc = window.__TAURI_INTERNALS__;
  return ipc && typeof ipc.invoke === 'function' ? ipc : null;
}

export function tauriIpcAvailable() {
  return internals() !== null;
}

export function tauriInvoke(command, args) {
  const ipc = internals();
  if (!ipc) {
    throw new Error('Tauri IPC is unavailable in this context');
  }
  return ipc.invoke(command, args);
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = tauriIpcAvailable)]
    fn tauri_ipc_available() -> bool;

    #[wasm_bindgen(catch, js_name = tauriInvoke)]
    fn tauri_invoke(command: &str, args: JsValue) -> Result<Promise, JsValue>;
}

fn decode_rejection(err: JsValue) -> DispatchError {
    if let Ok(decoded) = from_value::<DispatchError>(err.clone()) {
        return decoded;
    }
    match err.as_string() {
        Some(message) => DispatchError::from_bridge_message(&message),
        None => DispatchError::unknown(format!("{err:?}")),
    }
}

pub async fn invoke_command<A: Serialize>(command: &str, args: &A) -> Result<(), DispatchError> {
    if !tauri_ipc_available() {
        return Err(DispatchError::BridgeUnavailable);
    }
    let args = to_value(args)
        .map_err(|err| DispatchError::unknown(format!("failed to encode `{command}` args: {err}")))?;
    let promise = tauri_invoke(command, args).map_err(|_| DispatchError::BridgeUnavailable)?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(decode_rejection)
}

pub fn ipc_available() -> bool {
    tauri_ipc_available()
}
