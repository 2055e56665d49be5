use alloy::primitives::Address;
use thiserror::Error;

use seqdemo_chain::ChainId;
use seqdemo_core::DemoError;

/// Errors surfaced by a wallet session and its clients.
///
/// The `Display` text is what the demo shows next to the action that failed,
/// so precondition variants carry the exact user-facing sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("Connect a wallet to sign.")]
    NoWallet,

    #[error("No wallet address available to sign with.")]
    NoAccount,

    #[error("Unknown wallet {0}")]
    UnknownWallet(Address),

    #[error("Chain {0} is not supported")]
    UnsupportedChain(ChainId),

    #[error("A switch to chain {0} is already in progress")]
    SwitchInProgress(ChainId),

    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("{0}")]
    Signing(String),

    #[error("{0}")]
    Rpc(String),

    #[error("User rejected the request")]
    Rejected,
}

impl From<ConnectError> for DemoError {
    fn from(err: ConnectError) -> Self {
        match err {
            ConnectError::Rpc(msg) => DemoError::Network(msg),
            other => DemoError::Wallet(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqdemo_core::ErrorCategory;

    #[test]
    fn precondition_messages_are_user_facing() {
        assert_eq!(ConnectError::NoWallet.to_string(), "Connect a wallet to sign.");
        assert_eq!(
            ConnectError::NoAccount.to_string(),
            "No wallet address available to sign with."
        );
    }

    #[test]
    fn wrapped_messages_pass_through() {
        let err = ConnectError::Rpc("execution reverted".into());
        assert_eq!(err.to_string(), "execution reverted");
    }

    #[test]
    fn converts_into_demo_error_category() {
        let rpc: DemoError = ConnectError::Rpc("timeout".into()).into();
        assert_eq!(rpc.category(), ErrorCategory::NetworkError);
        let wallet: DemoError = ConnectError::Rejected.into();
        assert_eq!(wallet.category(), ErrorCategory::WalletError);
    }
}
