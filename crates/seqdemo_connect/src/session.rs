//! The wallet session seam.
//!
//! Everything the demo needs from a connect SDK sits behind
//! [`WalletConnector`]: the connected wallets, the chain list, chain
//! switching, transaction submission, and the two clients used for signing
//! and verification. The UI holds an `Arc<dyn WalletConnector>` and never
//! reaches past it, so tests substitute a fake session.

use std::sync::Arc;

use alloy::primitives::{Address, B256, Bytes};
use async_trait::async_trait;
use serde::Serialize;

use seqdemo_chain::{ChainId, ContractCall};

use crate::error::ConnectError;

/// A wallet connected to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wallet {
    pub address: Address,
    /// Connector-supplied display name, if any.
    pub name: Option<String>,
    pub is_active: bool,
}

/// A chain the session can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainSummary {
    pub id: ChainId,
    pub name: &'static str,
}

/// Progress of the most recent chain-switch request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SwitchStatus {
    #[default]
    Idle,
    Pending(ChainId),
    Success(ChainId),
    Failed { chain_id: ChainId, message: String },
}

impl SwitchStatus {
    /// Target chain of an in-flight switch.
    pub fn pending_chain(&self) -> Option<ChainId> {
        match self {
            Self::Pending(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// The pair of values whose change invalidates every per-session result:
/// the active wallet address and the active chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityKey {
    pub wallet: Option<Address>,
    pub chain_id: Option<ChainId>,
}

/// Point-in-time copy of the session state the view renders from.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub wallets: Vec<Wallet>,
    pub chains: Vec<ChainSummary>,
    pub active_chain_id: Option<ChainId>,
    pub switch_status: SwitchStatus,
    pub connect_modal_open: bool,
}

impl SessionSnapshot {
    pub fn active_wallet(&self) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.is_active)
    }

    pub fn active_chain(&self) -> Option<&ChainSummary> {
        let id = self.active_chain_id?;
        self.chains.iter().find(|c| c.id == id)
    }

    pub fn identity(&self) -> IdentityKey {
        IdentityKey {
            wallet: self.active_wallet().map(|w| w.address),
            chain_id: self.active_chain_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

/// Signing side of the active wallet.
#[async_trait]
pub trait WalletClient: Send + Sync {
    /// Accounts the wallet can sign for, primary account first.
    async fn addresses(&self) -> Result<Vec<Address>, ConnectError>;

    /// EIP-191 `personal_sign` over `message`.
    async fn sign_message(&self, account: Address, message: &str) -> Result<Bytes, ConnectError>;
}

/// Read-only chain access for the active network.
#[async_trait]
pub trait PublicClient: Send + Sync {
    /// Independently check that `signature` over `message` is valid for
    /// `address`. Contract wallets are checked on-chain.
    async fn verify_message(
        &self,
        address: Address,
        message: &str,
        signature: &[u8],
    ) -> Result<bool, ConnectError>;
}

// ---------------------------------------------------------------------------
// WalletConnector
// ---------------------------------------------------------------------------

/// A connected wallet session.
///
/// Implementations keep at most one wallet active at a time.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    fn wallets(&self) -> Vec<Wallet>;

    fn set_active_wallet(&self, address: Address) -> Result<(), ConnectError>;

    fn disconnect_wallet(&self, address: Address) -> Result<(), ConnectError>;

    fn set_connect_modal_open(&self, open: bool);

    fn is_connect_modal_open(&self) -> bool;

    fn chains(&self) -> Vec<ChainSummary>;

    fn active_chain_id(&self) -> Option<ChainId>;

    fn switch_status(&self) -> SwitchStatus;

    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), ConnectError>;

    /// Submit a contract call from the active wallet. Returns the transaction
    /// hash when the session reports one.
    async fn send_transaction(
        &self,
        chain_id: ChainId,
        call: ContractCall,
    ) -> Result<Option<B256>, ConnectError>;

    /// Signing client for the active wallet, if one is connected.
    fn wallet_client(&self) -> Option<Arc<dyn WalletClient>>;

    /// Verification client for `chain_id`, if the session serves that chain.
    fn public_client(&self, chain_id: ChainId) -> Option<Arc<dyn PublicClient>>;

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            wallets: self.wallets(),
            chains: self.chains(),
            active_chain_id: self.active_chain_id(),
            switch_status: self.switch_status(),
            connect_modal_open: self.is_connect_modal_open(),
        }
    }
}

/// Adds wallets to a session from the local connect prompt.
pub trait WalletOnboarding: Send + Sync {
    /// Create a fresh wallet and make it the active one.
    fn connect_new_wallet(&self, name: Option<String>) -> Address;

    /// Connect a wallet from a hex private key and make it active.
    fn import_wallet(&self, private_key: &str, name: Option<String>) -> Result<Address, ConnectError>;
}
