//! Typed contracts for dispatching open-file and open-url actions from a UI layer.
//!
//! This crate is the target-neutral boundary shared by the webview adapters in
//! `platform_host_web` and the native command handlers in `desktop_tauri`. It owns the
//! [`Action`] model, environment detection, the [`NativeBridge`] service trait, the
//! [`Dispatcher`] and the [`DispatchError`] taxonomy that crosses the IPC boundary.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod affordance;
pub mod bridge;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod targets;

pub use action::{
    Action, EmptyTarget, OpenFileArgs, OpenUrlArgs, OPEN_FILE_COMMAND, OPEN_URL_COMMAND,
};
pub use affordance::{Affordance, Hyperlink};
pub use bridge::{BridgeFuture, NativeBridge, RecordingBridge, UnavailableBridge};
pub use dispatch::{dispatch, report_outcome, Dispatch, Dispatcher};
pub use environment::{
    detect, detect_environment, Environment, EnvironmentProbe, StaticProbe, DESKTOP_SHELL_MARKER,
};
pub use error::DispatchError;
pub use targets::{LaunchTargets, LaunchTargetsError};
