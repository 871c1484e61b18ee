use super::*;

pub async fn invoke_command<A: Serialize>(
    _command: &str,
    _args: &A,
) -> Result<(), DispatchError> {
    Err(DispatchError::BridgeUnavailable)
}

pub fn ipc_available() -> bool {
    false
}
