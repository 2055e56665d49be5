// EVM chain metadata, RPC endpoints, the demo contract surface and signatures.

pub mod award;
pub mod chains;
pub mod error;
pub mod explorer;
pub mod rpc_config;
pub mod signature;

// Re-export primary types for convenient access.
pub use award::{ContractCall, DEMO_TOKEN_URI, MINT_CONTRACT_ADDRESS, award_item_call};
pub use chains::{
    ARBITRUM_ONE, ARBITRUM_SEPOLIA, ChainId, ChainInfo, ChainRegistry, ETHEREUM,
    MINT_ENABLED_CHAINS, POLYGON, SEPOLIA, chain_info, is_mint_enabled,
};
pub use error::ChainError;
pub use explorer::{explorer_link, explorer_tx_url, extract_tx_hash};
pub use rpc_config::{RpcConfig, RpcConfigStore, validate_url};
pub use signature::{
    DEMO_MESSAGE, ERC1271_MAGIC_VALUE, is_erc1271_magic, is_signed_by, is_valid_signature_call,
    message_hash, recover_signer,
};
