pub mod config;
pub mod error_handler;
pub mod logging;

pub use config::{ConnectConfig, SignInOptions, ThemeMode};
pub use error_handler::{DemoError, ErrorCategory, FALLBACK_ERROR_MESSAGE, error_message};
