use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when a failure carries no message text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Classification of errors for logging and user display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Wallet rejected or could not perform the request.
    WalletError,
    /// RPC connectivity or timeout issue.
    NetworkError,
    /// Invalid or missing configuration.
    ConfigError,
}

impl DemoError {
    /// Returns the broad error category for routing and display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::ConfigError,
            Self::Wallet(_) => ErrorCategory::WalletError,
            Self::Network(_) => ErrorCategory::NetworkError,
        }
    }

    /// Returns a user-friendly message (hides transport details).
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration issue: {msg}"),
            Self::Wallet(msg) => error_message(msg),
            Self::Network(_) => "Network error. Check your connection.".into(),
        }
    }
}

/// Reduce any error to the text shown in a status slot: its own message, or
/// [`FALLBACK_ERROR_MESSAGE`] when that message is blank.
pub fn error_message<E>(error: &E) -> String
where
    E: std::fmt::Display + ?Sized,
{
    let msg = error.to_string();
    if msg.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        msg
    }
}
