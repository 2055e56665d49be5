use std::fmt;

use serde::Serialize;
use tracing::debug;

use seqdemo_core::ConnectConfig;

use crate::error::ChainError;

/// EVM chain id.
pub type ChainId = u64;

pub const ETHEREUM: ChainId = 1;
pub const POLYGON: ChainId = 137;
pub const ARBITRUM_ONE: ChainId = 42_161;
pub const ARBITRUM_SEPOLIA: ChainId = 421_614;
pub const SEPOLIA: ChainId = 11_155_111;

/// The only networks the demo collectible contract is deployed on.
pub const MINT_ENABLED_CHAINS: [ChainId; 2] = [ARBITRUM_ONE, ARBITRUM_SEPOLIA];

/// Static metadata for a supported network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChainInfo {
    pub id: ChainId,
    pub name: &'static str,
    /// Path segment used by the Sequence node gateway.
    pub network: &'static str,
    pub testnet: bool,
}

impl fmt::Display for ChainInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const KNOWN_CHAINS: [ChainInfo; 5] = [
    ChainInfo {
        id: ETHEREUM,
        name: "Ethereum",
        network: "mainnet",
        testnet: false,
    },
    ChainInfo {
        id: POLYGON,
        name: "Polygon",
        network: "polygon",
        testnet: false,
    },
    ChainInfo {
        id: ARBITRUM_ONE,
        name: "Arbitrum One",
        network: "arbitrum",
        testnet: false,
    },
    ChainInfo {
        id: ARBITRUM_SEPOLIA,
        name: "Arbitrum Sepolia",
        network: "arbitrum-sepolia",
        testnet: true,
    },
    ChainInfo {
        id: SEPOLIA,
        name: "Sepolia",
        network: "sepolia",
        testnet: true,
    },
];

/// Look up metadata for a chain id.
pub fn chain_info(id: ChainId) -> Option<&'static ChainInfo> {
    KNOWN_CHAINS.iter().find(|c| c.id == id)
}

/// Whether the demo contract call is permitted on `id`.
pub fn is_mint_enabled(id: ChainId) -> bool {
    MINT_ENABLED_CHAINS.contains(&id)
}

// ---------------------------------------------------------------------------
// ChainRegistry
// ---------------------------------------------------------------------------

/// The ordered list of chains the app was configured with, plus the default.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: Vec<&'static ChainInfo>,
    default_chain: ChainId,
}

impl ChainRegistry {
    /// Build a registry from chain ids. Every id must be known and the default
    /// must be one of them.
    pub fn new(ids: &[ChainId], default_chain: ChainId) -> Result<Self, ChainError> {
        let chains = ids
            .iter()
            .map(|id| chain_info(*id).ok_or(ChainError::UnknownChain(*id)))
            .collect::<Result<Vec<_>, _>>()?;

        if !ids.contains(&default_chain) {
            return Err(ChainError::NotConfigured(default_chain));
        }

        debug!(count = chains.len(), default_chain, "chain registry built");
        Ok(Self {
            chains,
            default_chain,
        })
    }

    pub fn from_config(config: &ConnectConfig) -> Result<Self, ChainError> {
        Self::new(&config.chain_ids, config.default_chain_id)
    }

    pub fn chains(&self) -> impl Iterator<Item = &'static ChainInfo> + '_ {
        self.chains.iter().copied()
    }

    pub fn get(&self, id: ChainId) -> Option<&'static ChainInfo> {
        self.chains.iter().copied().find(|c| c.id == id)
    }

    pub fn contains(&self, id: ChainId) -> bool {
        self.get(id).is_some()
    }

    pub fn default_chain(&self) -> ChainId {
        self.default_chain
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
