use std::sync::LazyLock;

use regex::Regex;

use crate::chains::{ARBITRUM_ONE, ARBITRUM_SEPOLIA, ChainId};

static TX_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x[a-fA-F0-9]{64}").expect("valid tx hash regex"));

/// First transaction hash (`0x` + 64 hex digits) embedded in `text`.
pub fn extract_tx_hash(text: &str) -> Option<&str> {
    TX_HASH.find(text).map(|m| m.as_str())
}

/// Block explorer page for `hash`. Unrecognized or missing chains fall back
/// to Etherscan.
pub fn explorer_tx_url(chain_id: Option<ChainId>, hash: &str) -> String {
    match chain_id {
        Some(ARBITRUM_SEPOLIA) => format!("https://sepolia.arbiscan.io/tx/{hash}"),
        Some(ARBITRUM_ONE) => format!("https://arbiscan.io/tx/{hash}"),
        _ => format!("https://etherscan.io/tx/{hash}"),
    }
}

/// Explorer link for the hash found in a status line, if any.
pub fn explorer_link(chain_id: Option<ChainId>, status: &str) -> Option<String> {
    extract_tx_hash(status).map(|hash| explorer_tx_url(chain_id, hash))
}
