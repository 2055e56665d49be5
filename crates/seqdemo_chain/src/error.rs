use crate::chains::ChainId;

/// Errors raised while resolving chains, endpoints and signatures.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("unknown chain id {0}")]
    UnknownChain(ChainId),

    #[error("chain {0} is not configured")]
    NotConfigured(ChainId),

    #[error("invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),
}
