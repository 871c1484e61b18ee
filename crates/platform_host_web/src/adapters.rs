use std::rc::Rc;

use platform_host::{
    BridgeFuture, DispatchError, Dispatcher, Environment, NativeBridge, UnavailableBridge,
};

use crate::{selected_environment, TauriBridge};

/// Adapter enum that erases the concrete bridge behind [`NativeBridge`].
#[derive(Debug, Clone, Copy)]
pub enum NativeBridgeAdapter {
    /// Tauri IPC transport for desktop webviews.
    DesktopTauri(TauriBridge),
    /// Browser fallback; every call reports [`DispatchError::BridgeUnavailable`].
    Browser(UnavailableBridge),
}

impl NativeBridge for NativeBridgeAdapter {
    fn open_file<'a>(&'a self, path: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>> {
        match self {
            Self::DesktopTauri(bridge) => bridge.open_file(path),
            Self::Browser(bridge) => bridge.open_file(path),
        }
    }

    fn open_url<'a>(&'a self, url: &'a str) -> BridgeFuture<'a, Result<(), DispatchError>> {
        match self {
            Self::DesktopTauri(bridge) => bridge.open_url(url),
            Self::Browser(bridge) => bridge.open_url(url),
        }
    }
}

/// Returns the bridge adapter matching `environment`.
pub fn native_bridge(environment: Environment) -> NativeBridgeAdapter {
    match environment {
        Environment::Desktop => NativeBridgeAdapter::DesktopTauri(TauriBridge),
        Environment::Browser => NativeBridgeAdapter::Browser(UnavailableBridge),
    }
}

/// Builds a dispatcher for an explicit environment.
pub fn dispatcher_for(environment: Environment) -> Dispatcher {
    Dispatcher::new(environment, Rc::new(native_bridge(environment)))
}

/// Builds the dispatcher for the current page load.
pub fn build_dispatcher() -> Dispatcher {
    dispatcher_for(selected_environment())
}
