//! GPUI Global wrappers for the services the workspace reads.
//!
//! Set once by the app bootstrap; the workspace copies the handles it needs
//! at construction.

use std::sync::Arc;

use gpui::Global;

use seqdemo_connect::{WalletConnector, WalletOnboarding};
use seqdemo_core::ConnectConfig;

/// The wallet session handle.
pub struct AppSession(pub Arc<dyn WalletConnector>);
impl Global for AppSession {}

/// Local wallet creation and key import for the connect prompt.
pub struct AppOnboarding(pub Arc<dyn WalletOnboarding>);
impl Global for AppOnboarding {}

/// Handle to the tokio runtime that runs session calls.
pub struct AppRuntime(pub tokio::runtime::Handle);
impl Global for AppRuntime {}

pub struct AppConfig(pub ConnectConfig);
impl Global for AppConfig {}
