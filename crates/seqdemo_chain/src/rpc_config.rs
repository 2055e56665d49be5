use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use seqdemo_core::ConnectConfig;

use crate::chains::{ChainId, ChainRegistry};
use crate::error::ChainError;

const SEQUENCE_NODE_GATEWAY: &str = "https://nodes.sequence.app";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a single RPC endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RpcConfig {
    pub chain_id: ChainId,
    pub url: String,
    pub is_custom: bool,
    pub timeout_secs: u64,
}

/// Manages per-chain RPC endpoint configuration with custom override support.
///
/// Defaults point at the Sequence node gateway, authenticated by the project
/// access key embedded in the path.
#[derive(Debug, Clone)]
pub struct RpcConfigStore {
    configs: HashMap<ChainId, RpcConfig>,
    defaults: HashMap<ChainId, String>,
}

impl RpcConfigStore {
    /// Create a store with gateway URLs for every chain in the registry.
    pub fn with_defaults(registry: &ChainRegistry, access_key: &str) -> Self {
        let defaults: HashMap<ChainId, String> = registry
            .chains()
            .map(|chain| {
                (
                    chain.id,
                    format!("{SEQUENCE_NODE_GATEWAY}/{}/{access_key}", chain.network),
                )
            })
            .collect();

        let configs = defaults
            .iter()
            .map(|(chain_id, url)| {
                let rpc = RpcConfig {
                    chain_id: *chain_id,
                    url: url.clone(),
                    is_custom: false,
                    timeout_secs: DEFAULT_TIMEOUT_SECS,
                };
                (*chain_id, rpc)
            })
            .collect();

        Self { configs, defaults }
    }

    /// Defaults plus the custom endpoints listed in `config.rpc_overrides`.
    pub fn from_config(config: &ConnectConfig, registry: &ChainRegistry) -> Result<Self, ChainError> {
        let mut store = Self::with_defaults(registry, &config.project_access_key);
        for (chain_id, url) in &config.rpc_overrides {
            if !registry.contains(*chain_id) {
                return Err(ChainError::NotConfigured(*chain_id));
            }
            store.set_custom_rpc(*chain_id, url.clone())?;
        }
        Ok(store)
    }

    /// Get the RPC configuration for a chain.
    pub fn get_rpc(&self, chain_id: ChainId) -> Option<&RpcConfig> {
        self.configs.get(&chain_id)
    }

    /// Override the RPC URL for a chain with a custom endpoint.
    pub fn set_custom_rpc(&mut self, chain_id: ChainId, url: String) -> Result<(), ChainError> {
        if !validate_url(&url) {
            return Err(ChainError::InvalidRpcUrl(url));
        }

        let entry = self.configs.entry(chain_id).or_insert_with(|| RpcConfig {
            chain_id,
            url: String::new(),
            is_custom: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        });
        entry.url = url;
        entry.is_custom = true;
        info!(chain_id, "custom RPC endpoint set");
        Ok(())
    }

    /// Reset a chain's RPC URL back to the gateway default.
    pub fn reset_to_default(&mut self, chain_id: ChainId) {
        if let Some(default_url) = self.defaults.get(&chain_id) {
            let entry = self.configs.entry(chain_id).or_insert_with(|| RpcConfig {
                chain_id,
                url: String::new(),
                is_custom: false,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            });
            entry.url = default_url.clone();
            entry.is_custom = false;
        }
    }
}

/// Validate that a URL is well-formed and uses HTTP or HTTPS.
pub fn validate_url(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed) => {
            let scheme = parsed.scheme();
            (scheme == "http" || scheme == "https") && parsed.host().is_some()
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{ARBITRUM_ONE, ARBITRUM_SEPOLIA, ETHEREUM};

    fn registry() -> ChainRegistry {
        ChainRegistry::new(&[ARBITRUM_SEPOLIA, ARBITRUM_ONE, ETHEREUM], ARBITRUM_SEPOLIA).unwrap()
    }

    #[test]
    fn defaults_use_sequence_gateway() {
        let store = RpcConfigStore::with_defaults(&registry(), "test-key");
        let rpc = store.get_rpc(ARBITRUM_SEPOLIA).unwrap();
        assert_eq!(rpc.url, "https://nodes.sequence.app/arbitrum-sepolia/test-key");
        assert!(!rpc.is_custom);
        assert_eq!(rpc.timeout_secs, 30);
        assert!(store.get_rpc(137).is_none());
    }

    #[test]
    fn set_custom_rpc_marks_as_custom() {
        let mut store = RpcConfigStore::with_defaults(&registry(), "k");
        store
            .set_custom_rpc(ETHEREUM, "https://my-node.example.com".into())
            .unwrap();

        let rpc = store.get_rpc(ETHEREUM).unwrap();
        assert!(rpc.is_custom);
        assert_eq!(rpc.url, "https://my-node.example.com");
    }

    #[test]
    fn set_custom_rpc_rejects_invalid_url() {
        let mut store = RpcConfigStore::with_defaults(&registry(), "k");
        let result = store.set_custom_rpc(ARBITRUM_ONE, "not-a-url".into());
        assert!(matches!(result, Err(ChainError::InvalidRpcUrl(_))));
        let result = store.set_custom_rpc(ARBITRUM_ONE, "ftp://files.example.com".into());
        assert!(result.is_err());
    }

    #[test]
    fn reset_to_default_restores_gateway_url() {
        let mut store = RpcConfigStore::with_defaults(&registry(), "k");
        let original = store.get_rpc(ARBITRUM_ONE).unwrap().url.clone();

        store
            .set_custom_rpc(ARBITRUM_ONE, "http://localhost:8545".into())
            .unwrap();
        assert_ne!(store.get_rpc(ARBITRUM_ONE).unwrap().url, original);

        store.reset_to_default(ARBITRUM_ONE);
        let after_reset = store.get_rpc(ARBITRUM_ONE).unwrap();
        assert_eq!(after_reset.url, original);
        assert!(!after_reset.is_custom);
    }

    #[test]
    fn from_config_applies_overrides() {
        let mut config = ConnectConfig {
            chain_ids: vec![ARBITRUM_SEPOLIA, ARBITRUM_ONE, ETHEREUM],
            ..ConnectConfig::default()
        };
        config
            .rpc_overrides
            .insert(ARBITRUM_ONE, "http://127.0.0.1:8545".into());

        let store = RpcConfigStore::from_config(&config, &registry()).unwrap();
        assert!(store.get_rpc(ARBITRUM_ONE).unwrap().is_custom);
        assert!(!store.get_rpc(ETHEREUM).unwrap().is_custom);
    }

    #[test]
    fn from_config_rejects_override_for_unconfigured_chain() {
        let mut config = ConnectConfig::default();
        config.rpc_overrides.insert(137, "http://127.0.0.1:8545".into());
        let result = RpcConfigStore::from_config(&config, &registry());
        assert!(matches!(result, Err(ChainError::NotConfigured(137))));
    }

    #[test]
    fn validate_url_rejects_garbage() {
        assert!(validate_url("https://rpc.example.com"));
        assert!(validate_url("http://localhost:8545"));
        assert!(!validate_url(""));
        assert!(!validate_url("not a url"));
        assert!(!validate_url("file:///etc/passwd"));
    }
}
