//! Local connect provider.
//!
//! Holds in-process wallets (random test wallets or imported keys), the
//! configured chain list and the RPC endpoints, and implements
//! [`WalletConnector`] on top of them. Signing is done locally; transaction
//! submission and contract-wallet verification go through the chain's RPC.

use std::sync::Arc;
use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, B256, Bytes};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::TransactionRequest;
use alloy::signers::Signer;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::{Http, reqwest};
use anyhow::{Context, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use seqdemo_chain::{
    ChainId, ChainRegistry, ContractCall, RpcConfig, RpcConfigStore, is_erc1271_magic,
    is_signed_by, is_valid_signature_call,
};
use seqdemo_core::ConnectConfig;

use crate::error::ConnectError;
use crate::session::{
    ChainSummary, PublicClient, SwitchStatus, Wallet, WalletClient, WalletConnector,
    WalletOnboarding,
};

struct LocalAccount {
    signer: PrivateKeySigner,
    name: Option<String>,
}

struct SessionState {
    accounts: Vec<LocalAccount>,
    active: Option<Address>,
    active_chain: ChainId,
    switch_status: SwitchStatus,
    connect_modal_open: bool,
}

/// In-process wallet session.
pub struct ConnectProvider {
    config: ConnectConfig,
    registry: ChainRegistry,
    rpc: RpcConfigStore,
    state: RwLock<SessionState>,
}

impl ConnectProvider {
    /// Build a provider from validated configuration. Starts with no wallets
    /// on the configured default chain.
    pub fn new(config: ConnectConfig) -> Result<Self> {
        config.validate()?;
        let registry = ChainRegistry::from_config(&config).context("invalid chain list")?;
        let rpc = RpcConfigStore::from_config(&config, &registry).context("invalid RPC overrides")?;
        Ok(Self::with_parts(config, registry, rpc))
    }

    pub fn with_parts(config: ConnectConfig, registry: ChainRegistry, rpc: RpcConfigStore) -> Self {
        let state = SessionState {
            accounts: Vec::new(),
            active: None,
            active_chain: registry.default_chain(),
            switch_status: SwitchStatus::Idle,
            connect_modal_open: false,
        };
        info!(
            app = %config.app_name,
            chains = registry.len(),
            default_chain = registry.default_chain(),
            "connect provider ready"
        );
        Self {
            config,
            registry,
            rpc,
            state: RwLock::new(state),
        }
    }

    pub fn config(&self) -> &ConnectConfig {
        &self.config
    }

    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    fn add_account(&self, account: LocalAccount) {
        let mut state = self.state.write();
        let address = account.signer.address();
        if !state.accounts.iter().any(|a| a.signer.address() == address) {
            state.accounts.push(account);
        }
        state.active = Some(address);
        state.connect_modal_open = false;
    }

    fn active_signer(&self) -> Option<PrivateKeySigner> {
        let state = self.state.read();
        let active = state.active?;
        state
            .accounts
            .iter()
            .find(|a| a.signer.address() == active)
            .map(|a| a.signer.clone())
    }

    fn rpc_for(&self, chain_id: ChainId) -> Result<RpcConfig, ConnectError> {
        if !self.registry.contains(chain_id) {
            return Err(ConnectError::UnsupportedChain(chain_id));
        }
        self.rpc
            .get_rpc(chain_id)
            .cloned()
            .ok_or(ConnectError::UnsupportedChain(chain_id))
    }
}

impl WalletOnboarding for ConnectProvider {
    fn connect_new_wallet(&self, name: Option<String>) -> Address {
        let signer = PrivateKeySigner::random();
        let address = signer.address();
        self.add_account(LocalAccount { signer, name });
        info!(%address, "connected new test wallet");
        address
    }

    /// Importing a key that is already connected only re-activates it.
    fn import_wallet(&self, private_key: &str, name: Option<String>) -> Result<Address, ConnectError> {
        let signer = private_key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| ConnectError::InvalidKey(e.to_string()))?;
        let address = signer.address();
        self.add_account(LocalAccount { signer, name });
        info!(%address, "imported wallet");
        Ok(address)
    }
}

/// JSON-RPC client over HTTP with the endpoint's timeout applied.
fn rpc_client(rpc: &RpcConfig) -> Result<RpcClient, ConnectError> {
    let url = url::Url::parse(&rpc.url)
        .map_err(|e| ConnectError::Rpc(format!("invalid RPC URL for chain {}: {e}", rpc.chain_id)))?;
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(rpc.timeout_secs))
        .build()
        .map_err(|e| ConnectError::Rpc(e.to_string()))?;
    Ok(RpcClient::new(Http::with_client(http, url), false))
}

#[async_trait]
impl WalletConnector for ConnectProvider {
    fn wallets(&self) -> Vec<Wallet> {
        let state = self.state.read();
        state
            .accounts
            .iter()
            .map(|a| {
                let address = a.signer.address();
                Wallet {
                    address,
                    name: a.name.clone(),
                    is_active: state.active == Some(address),
                }
            })
            .collect()
    }

    fn set_active_wallet(&self, address: Address) -> Result<(), ConnectError> {
        let mut state = self.state.write();
        if !state.accounts.iter().any(|a| a.signer.address() == address) {
            return Err(ConnectError::UnknownWallet(address));
        }
        state.active = Some(address);
        debug!(%address, "active wallet changed");
        Ok(())
    }

    fn disconnect_wallet(&self, address: Address) -> Result<(), ConnectError> {
        let mut state = self.state.write();
        let index = state
            .accounts
            .iter()
            .position(|a| a.signer.address() == address)
            .ok_or(ConnectError::UnknownWallet(address))?;
        state.accounts.remove(index);
        if state.active == Some(address) {
            state.active = None;
        }
        info!(%address, "wallet disconnected");
        Ok(())
    }

    fn set_connect_modal_open(&self, open: bool) {
        self.state.write().connect_modal_open = open;
    }

    fn is_connect_modal_open(&self) -> bool {
        self.state.read().connect_modal_open
    }

    fn chains(&self) -> Vec<ChainSummary> {
        self.registry
            .chains()
            .map(|c| ChainSummary {
                id: c.id,
                name: c.name,
            })
            .collect()
    }

    fn active_chain_id(&self) -> Option<ChainId> {
        Some(self.state.read().active_chain)
    }

    fn switch_status(&self) -> SwitchStatus {
        self.state.read().switch_status.clone()
    }

    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), ConnectError> {
        let mut state = self.state.write();
        if !self.registry.contains(chain_id) {
            let err = ConnectError::UnsupportedChain(chain_id);
            state.switch_status = SwitchStatus::Failed {
                chain_id,
                message: err.to_string(),
            };
            warn!(chain_id, "switch to unsupported chain refused");
            return Err(err);
        }
        state.active_chain = chain_id;
        state.switch_status = SwitchStatus::Success(chain_id);
        info!(chain_id, "switched chain");
        Ok(())
    }

    async fn send_transaction(
        &self,
        chain_id: ChainId,
        call: ContractCall,
    ) -> Result<Option<B256>, ConnectError> {
        let signer = self.active_signer().ok_or(ConnectError::NoWallet)?;
        let rpc = self.rpc_for(chain_id)?;
        let from = signer.address();
        info!(chain_id, %from, to = %call.to, "submitting transaction");

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_client(rpc_client(&rpc)?);
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_to(call.to)
            .with_input(call.data)
            .with_chain_id(chain_id);

        let pending = provider
            .send_transaction(tx)
            .await
            .map_err(|e| ConnectError::Rpc(e.to_string()))?;
        let hash = *pending.tx_hash();
        info!(chain_id, %hash, "transaction submitted");
        Ok(Some(hash))
    }

    fn wallet_client(&self) -> Option<Arc<dyn WalletClient>> {
        self.active_signer()
            .map(|signer| Arc::new(LocalWalletClient::new(signer)) as Arc<dyn WalletClient>)
    }

    fn public_client(&self, chain_id: ChainId) -> Option<Arc<dyn PublicClient>> {
        let rpc = self.rpc_for(chain_id).ok()?;
        Some(Arc::new(RpcPublicClient::new(rpc)))
    }
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

/// Signs with an in-process private key.
pub struct LocalWalletClient {
    signer: PrivateKeySigner,
}

impl LocalWalletClient {
    pub fn new(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }
}

#[async_trait]
impl WalletClient for LocalWalletClient {
    async fn addresses(&self) -> Result<Vec<Address>, ConnectError> {
        Ok(vec![self.signer.address()])
    }

    async fn sign_message(&self, account: Address, message: &str) -> Result<Bytes, ConnectError> {
        if account != self.signer.address() {
            return Err(ConnectError::Signing(format!(
                "account {account} is not managed by this wallet"
            )));
        }
        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| ConnectError::Signing(e.to_string()))?;
        Ok(Bytes::copy_from_slice(&signature.as_bytes()))
    }
}

/// Verifies signatures against a chain's RPC endpoint.
///
/// Externally owned accounts are recovered locally and never touch the
/// network. Anything else is asked via ERC-1271 `isValidSignature`.
pub struct RpcPublicClient {
    rpc: RpcConfig,
}

impl RpcPublicClient {
    pub fn new(rpc: RpcConfig) -> Self {
        Self { rpc }
    }
}

#[async_trait]
impl PublicClient for RpcPublicClient {
    async fn verify_message(
        &self,
        address: Address,
        message: &str,
        signature: &[u8],
    ) -> Result<bool, ConnectError> {
        if is_signed_by(address, message, signature) {
            return Ok(true);
        }

        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_client(rpc_client(&self.rpc)?);
        let code = provider
            .get_code_at(address)
            .await
            .map_err(|e| ConnectError::Rpc(e.to_string()))?;
        if code.is_empty() {
            debug!(%address, "signature does not recover to account");
            return Ok(false);
        }

        let tx = TransactionRequest::default()
            .with_to(address)
            .with_input(is_valid_signature_call(message, signature));
        match provider.call(tx).await {
            Ok(returned) => Ok(is_erc1271_magic(&returned)),
            Err(e) => {
                debug!(%address, error = %e, "isValidSignature call failed");
                Ok(false)
            }
        }
    }
}
