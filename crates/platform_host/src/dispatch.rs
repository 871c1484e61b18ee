//! Command dispatch: routes actions to the native bridge or to a hyperlink fallback.

use std::rc::Rc;

use crate::{Action, Affordance, BridgeFuture, DispatchError, Environment, Hyperlink, NativeBridge};

/// Result of dispatching one action.
pub enum Dispatch<'a> {
    /// Pending native bridge request. Await it to observe the outcome; drop it to abandon.
    Bridge(BridgeFuture<'a, Result<(), DispatchError>>),
    /// No bridge call was made; the UI navigates to this link instead.
    Hyperlink(Hyperlink),
}

impl Dispatch<'_> {
    /// Returns the fallback link when the dispatch resolved to navigation.
    pub fn hyperlink(&self) -> Option<&Hyperlink> {
        match self {
            Self::Bridge(_) => None,
            Self::Hyperlink(link) => Some(link),
        }
    }

    /// Awaits the bridge request, or succeeds immediately for hyperlink navigation.
    pub async fn into_result(self) -> Result<(), DispatchError> {
        match self {
            Self::Bridge(pending) => pending.await,
            Self::Hyperlink(_) => Ok(()),
        }
    }
}

impl std::fmt::Debug for Dispatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bridge(_) => f.write_str("Dispatch::Bridge(..)"),
            Self::Hyperlink(link) => f.debug_tuple("Dispatch::Hyperlink").field(link).finish(),
        }
    }
}

/// Routes `action` according to `environment`.
///
/// Desktop environments issue exactly one bridge call carrying the action's exact target.
/// Browser environments never touch the bridge.
///
/// The browser-side [`Hyperlink`] is labelled with the raw target; UI code that renders its own
/// text should navigate with the [`Affordance`] link from [`Dispatcher::affordance`] instead.
pub fn dispatch<'a>(
    bridge: &'a dyn NativeBridge,
    action: &'a Action,
    environment: Environment,
) -> Dispatch<'a> {
    match environment {
        Environment::Desktop => Dispatch::Bridge(bridge.invoke(action)),
        Environment::Browser => {
            Dispatch::Hyperlink(Hyperlink::for_action(action, action.target()))
        }
    }
}

/// Logs the outcome of a dispatched action.
pub fn report_outcome(action: &Action, outcome: &Result<(), DispatchError>) {
    let noun = match action {
        Action::OpenFile(_) => "File",
        Action::OpenUrl(_) => "URL",
    };
    match outcome {
        Ok(()) => log::info!("{noun} opened successfully: {}", action.target()),
        Err(err) => log::warn!(
            "Failed to open {} `{}` ({}): {err}",
            noun.to_lowercase(),
            action.target(),
            err.kind()
        ),
    }
}

/// Environment-bound dispatcher injected into UI code.
///
/// The environment is fixed at construction; it is never re-evaluated per call.
#[derive(Clone)]
pub struct Dispatcher {
    environment: Environment,
    bridge: Rc<dyn NativeBridge>,
}

impl Dispatcher {
    /// Binds a detected environment to a bridge.
    pub fn new(environment: Environment, bridge: Rc<dyn NativeBridge>) -> Self {
        Self {
            environment,
            bridge,
        }
    }

    /// Environment selected at construction.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Chooses the UI control for `action`.
    pub fn affordance(&self, action: &Action, subject: &str) -> Affordance {
        Affordance::for_action(self.environment, action, subject)
    }

    /// Dispatches `action` under the bound environment.
    pub fn dispatch<'a>(&'a self, action: &'a Action) -> Dispatch<'a> {
        dispatch(self.bridge.as_ref(), action, self.environment)
    }

    /// Dispatches `action`, awaits the outcome and logs it.
    ///
    /// # Errors
    ///
    /// Returns the bridge failure unchanged; nothing is retried.
    pub async fn dispatch_and_report(&self, action: &Action) -> Result<(), DispatchError> {
        let outcome = self.dispatch(action).into_result().await;
        if self.environment.uses_native_bridge() {
            report_outcome(action, &outcome);
        }
        outcome
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
