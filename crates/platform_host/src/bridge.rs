//! Native bridge contracts and lightweight adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use crate::{Action, DispatchError};

/// Object-safe boxed future used by [`NativeBridge`].
///
/// Dropping the future before it resolves abandons the request on the caller's side.
pub type BridgeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host boundary that performs OS-level open operations on behalf of the UI.
pub trait NativeBridge {
    /// Opens a local file with the host's default application.
    fn open_file<'a>(&'a self, path: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>>;

    /// Opens a URL with the host's default browser.
    fn open_url<'a>(&'a self, url: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>>;

    /// Routes an [`Action`] to the matching bridge command.
    fn invoke<'a>(&'a self, action: &'a Action) -> BridgeFuture<'a, Result<(), DispatchError>> {
        match action {
            Action::OpenFile(path) => self.open_file(path),
            Action::OpenUrl(url) => self.open_url(url),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Bridge for runtimes without a native shell; every call fails with
/// [`DispatchError::BridgeUnavailable`].
pub struct UnavailableBridge;

impl NativeBridge for UnavailableBridge {
    fn open_file<'a>(&'a self, _path: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>> {
        Box::pin(async { Err(DispatchError::BridgeUnavailable) })
    }

    fn open_url<'a>(&'a self, _url: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>> {
        Box::pin(async { Err(DispatchError::BridgeUnavailable) })
    }
}

#[derive(Debug, Default)]
struct RecordingState {
    calls: Vec<Action>,
    failures: HashMap<String, DispatchError>,
}

#[derive(Debug, Clone, Default)]
/// In-memory bridge that records every call and replays scripted per-target failures.
///
/// Clones share state, so a test can keep one handle while the dispatcher owns another.
pub struct RecordingBridge {
    inner: Rc<RefCell<RecordingState>>,
}

impl RecordingBridge {
    /// Makes every future call targeting `target` fail with `err`.
    pub fn fail_target(&self, target: impl Into<String>, err: DispatchError) {
        self.inner.borrow_mut().failures.insert(target.into(), err);
    }

    /// Returns the actions received so far, in call order.
    pub fn calls(&self) -> Vec<Action> {
        self.inner.borrow().calls.clone()
    }

    /// Returns the number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.inner.borrow().calls.len()
    }

    fn record(&self, action: Action) -> Result<(), DispatchError> {
        let mut state = self.inner.borrow_mut();
        let outcome = match state.failures.get(action.target()) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        };
        state.calls.push(action);
        outcome
    }
}

impl NativeBridge for RecordingBridge {
    fn open_file<'a>(&'a self, path: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>> {
        Box::pin(async move { self.record(Action::OpenFile(path.to_string())) })
    }

    fn open_url<'a>(&'a self, url: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>> {
        Box::pin(async move { self.record(Action::OpenUrl(url.to_string())) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn unavailable_bridge_rejects_every_command() {
        let bridge = UnavailableBridge;
        let bridge_obj: &dyn NativeBridge = &bridge;

        assert_eq!(
            block_on(bridge_obj.open_file("/tmp/a.jpg")),
            Err(DispatchError::BridgeUnavailable)
        );
        assert_eq!(
            block_on(bridge_obj.open_url("https://www.google.com")),
            Err(DispatchError::BridgeUnavailable)
        );
    }

    #[test]
    fn recording_bridge_records_calls_and_replays_failures() {
        let bridge = RecordingBridge::default();
        bridge.fail_target("/missing.jpg", DispatchError::NotFound);
        let bridge_obj: &dyn NativeBridge = &bridge;

        block_on(bridge_obj.open_file("/tmp/a.jpg")).expect("open file");
        assert_eq!(
            block_on(bridge_obj.open_file("/missing.jpg")),
            Err(DispatchError::NotFound)
        );
        block_on(bridge_obj.open_url("https://www.google.com")).expect("open url");

        assert_eq!(
            bridge.calls(),
            vec![
                Action::OpenFile("/tmp/a.jpg".to_string()),
                Action::OpenFile("/missing.jpg".to_string()),
                Action::OpenUrl("https://www.google.com".to_string()),
            ]
        );
    }

    #[test]
    fn invoke_routes_by_action_variant() {
        let bridge = RecordingBridge::default();
        let action = Action::OpenUrl("https://example.com".to_string());

        block_on(bridge.invoke(&action)).expect("invoke");
        assert_eq!(bridge.calls(), vec![action]);
    }
}
