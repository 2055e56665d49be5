//! The wallet-experience state machine.
//!
//! [`WalletExperience`] owns the per-session results shown in the demo: the
//! last signature with its verification outcome, and the mint status line.
//! All of it belongs to one identity (active wallet, active chain). When the
//! identity changes, [`WalletExperience::sync`] clears the results and bumps
//! a generation counter, and completions tagged with an older
//! [`RequestTicket`] are dropped instead of being shown against the new
//! identity.
//!
//! Chain switches are claimed here too, before the session call is spawned,
//! so a second click cannot issue another switch while the first has not yet
//! reached the session.

use std::fmt;

use alloy::primitives::hex;
use alloy::primitives::{B256, Bytes};
use tracing::{debug, info, warn};

use seqdemo_chain::{ChainId, ContractCall, DEMO_MESSAGE, award_item_call, explorer_link, is_mint_enabled};
use seqdemo_core::{DemoError, error_message};

use crate::error::ConnectError;
use crate::session::{IdentityKey, SessionSnapshot, WalletConnector};
use crate::view;

pub const MINT_NO_WALLET: &str = "Connect a wallet first.";
pub const MINT_NO_CHAIN: &str = "No active chain selected.";
pub const MINT_WRONG_CHAIN: &str = "Switch to Arbitrum One or Arbitrum Sepolia to mint.";

// ---------------------------------------------------------------------------
// Status types
// ---------------------------------------------------------------------------

/// Sign-and-verify progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignStatus {
    #[default]
    Idle,
    Signing,
    Signed { signature: String, is_valid: bool },
    Failed(String),
}

impl SignStatus {
    pub fn is_signing(&self) -> bool {
        matches!(self, Self::Signing)
    }

    /// Hex signature of the last successful sign.
    pub fn signature(&self) -> Option<&str> {
        match self {
            Self::Signed { signature, .. } => Some(signature),
            _ => None,
        }
    }

    /// Verification outcome. `None` until a signature exists.
    pub fn is_valid(&self) -> Option<bool> {
        match self {
            Self::Signed { is_valid, .. } => Some(*is_valid),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Mint progress. `Display` renders the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintStatus {
    Minting,
    Submitted(B256),
    /// The session accepted the transaction but reported no hash.
    Sent,
    /// A precondition failed before anything was submitted.
    Blocked(&'static str),
    Failed(String),
}

impl MintStatus {
    pub fn is_minting(&self) -> bool {
        matches!(self, Self::Minting)
    }
}

impl fmt::Display for MintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minting => f.write_str("Minting NFT..."),
            Self::Submitted(hash) => write!(f, "Submitted: {}", hex::encode_prefixed(hash)),
            Self::Sent => f.write_str("Transaction sent"),
            Self::Blocked(msg) => f.write_str(msg),
            Self::Failed(msg) => f.write_str(msg),
        }
    }
}

/// Identifies the request a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub identity: IdentityKey,
    pub generation: u64,
}

/// Outcome of a sign-and-verify round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMessage {
    pub signature: Bytes,
    pub is_valid: bool,
}

/// A mint that passed its preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRequest {
    pub chain_id: ChainId,
    pub call: ContractCall,
}

// ---------------------------------------------------------------------------
// WalletExperience
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct WalletExperience {
    identity: IdentityKey,
    generation: u64,
    sign: SignStatus,
    mint: Option<MintStatus>,
    /// Switch claimed by [`Self::begin_switch`] and not yet finished. Kept
    /// across identity resets since a completed switch changes the identity.
    switching: Option<ChainId>,
}

/// Log a failed session call with its error category.
fn log_failure(action: &'static str, err: &ConnectError) {
    let category = DemoError::from(err.clone()).category();
    warn!(?category, error = %err, "{action} failed");
}

impl WalletExperience {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> IdentityKey {
        self.identity
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn sign_status(&self) -> &SignStatus {
        &self.sign
    }

    pub fn mint_status(&self) -> Option<&MintStatus> {
        self.mint.as_ref()
    }

    /// The mint status line, if any.
    pub fn tx_status(&self) -> Option<String> {
        self.mint.as_ref().map(ToString::to_string)
    }

    pub fn is_signing(&self) -> bool {
        self.sign.is_signing()
    }

    pub fn is_minting(&self) -> bool {
        self.mint.as_ref().is_some_and(MintStatus::is_minting)
    }

    /// Explorer URL for the hash in the current status line.
    pub fn explorer_link(&self) -> Option<String> {
        let status = self.tx_status()?;
        explorer_link(self.identity.chain_id, &status)
    }

    /// Adopt `identity`. If it differs from the current one, every result is
    /// cleared and outstanding tickets become stale. Returns whether a reset
    /// happened.
    pub fn sync(&mut self, identity: IdentityKey) -> bool {
        if identity == self.identity {
            return false;
        }
        self.identity = identity;
        self.generation += 1;
        self.sign = SignStatus::Idle;
        self.mint = None;
        info!(
            wallet = ?identity.wallet,
            chain_id = ?identity.chain_id,
            generation = self.generation,
            "session identity changed, results cleared"
        );
        true
    }

    fn ticket(&self) -> RequestTicket {
        RequestTicket {
            identity: self.identity,
            generation: self.generation,
        }
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation && ticket.identity == self.identity
    }

    /// Start a sign. Without an active wallet the sign fails immediately and
    /// no ticket is issued.
    pub fn begin_sign(&mut self, snapshot: &SessionSnapshot) -> Option<RequestTicket> {
        self.sync(snapshot.identity());
        if snapshot.active_wallet().is_none() || snapshot.active_chain_id.is_none() {
            self.sign = SignStatus::Failed(ConnectError::NoWallet.to_string());
            return None;
        }
        self.sign = SignStatus::Signing;
        Some(self.ticket())
    }

    /// Record a sign completion. Returns `false` if the ticket was stale and
    /// the result discarded.
    pub fn finish_sign(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<SignedMessage, ConnectError>,
    ) -> bool {
        if !self.is_current(ticket) {
            warn!(generation = ticket.generation, "discarding stale sign result");
            return false;
        }
        self.sign = match outcome {
            Ok(signed) => {
                debug!(is_valid = signed.is_valid, "message signed");
                SignStatus::Signed {
                    signature: hex::encode_prefixed(&signed.signature),
                    is_valid: signed.is_valid,
                }
            }
            Err(e) => {
                log_failure("sign", &e);
                SignStatus::Failed(error_message(&e))
            }
        };
        true
    }

    /// Check mint preconditions against the session and, if they hold, enter
    /// the minting state. Failed preconditions set the status line and issue
    /// no request.
    pub fn begin_mint(&mut self, snapshot: &SessionSnapshot) -> Option<(RequestTicket, MintRequest)> {
        self.sync(snapshot.identity());
        let blocked = |reason: &'static str| {
            debug!(reason, "mint blocked");
            Some(MintStatus::Blocked(reason))
        };

        let Some(wallet) = snapshot.active_wallet() else {
            self.mint = blocked(MINT_NO_WALLET);
            return None;
        };
        let Some(chain_id) = snapshot.active_chain_id else {
            self.mint = blocked(MINT_NO_CHAIN);
            return None;
        };
        if !is_mint_enabled(chain_id) {
            self.mint = blocked(MINT_WRONG_CHAIN);
            return None;
        }

        self.mint = Some(MintStatus::Minting);
        let request = MintRequest {
            chain_id,
            call: award_item_call(wallet.address),
        };
        Some((self.ticket(), request))
    }

    /// Record a mint completion. Returns `false` if the ticket was stale and
    /// the result discarded.
    pub fn finish_mint(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Option<B256>, ConnectError>,
    ) -> bool {
        if !self.is_current(ticket) {
            warn!(generation = ticket.generation, "discarding stale mint result");
            return false;
        }
        self.mint = Some(match outcome {
            Ok(Some(hash)) => MintStatus::Submitted(hash),
            Ok(None) => MintStatus::Sent,
            Err(e) => {
                log_failure("mint", &e);
                MintStatus::Failed(error_message(&e))
            }
        });
        true
    }

    /// Chain a switch is in flight to, as far as this view knows.
    pub fn pending_switch(&self) -> Option<ChainId> {
        self.switching
    }

    /// Claim a switch to `chain_id`. Refused while an earlier claim or a
    /// session-side switch is still in flight. `Ok(false)` means the chain is
    /// already active or not offered, and nothing is claimed.
    pub fn begin_switch(
        &mut self,
        snapshot: &SessionSnapshot,
        chain_id: ChainId,
    ) -> Result<bool, ConnectError> {
        if let Some(pending) = self
            .switching
            .or_else(|| snapshot.switch_status.pending_chain())
        {
            debug!(pending, requested = chain_id, "switch already in flight");
            return Err(ConnectError::SwitchInProgress(pending));
        }
        if !view::can_switch_to(snapshot, chain_id) {
            return Ok(false);
        }
        self.switching = Some(chain_id);
        Ok(true)
    }

    /// Release the claim taken for `chain_id`. A failure is only logged; the
    /// chain selector simply stops showing the switch as pending.
    pub fn finish_switch(&mut self, chain_id: ChainId, outcome: Result<bool, ConnectError>) {
        if self.switching == Some(chain_id) {
            self.switching = None;
        }
        match outcome {
            Ok(true) => info!(chain_id, "chain switched"),
            Ok(false) => debug!(chain_id, "chain already active or unavailable"),
            Err(e) => log_failure("switch", &e),
        }
    }
}

// ---------------------------------------------------------------------------
// Session round trips
// ---------------------------------------------------------------------------

/// Sign [`DEMO_MESSAGE`] with the active wallet's primary account and verify
/// the signature through the active chain's public client.
pub async fn sign_demo_message(session: &dyn WalletConnector) -> Result<SignedMessage, ConnectError> {
    let wallet_client = session.wallet_client();
    let public_client = session
        .active_chain_id()
        .and_then(|chain_id| session.public_client(chain_id));
    let (Some(wallet_client), Some(public_client)) = (wallet_client, public_client) else {
        return Err(ConnectError::NoWallet);
    };

    let account = wallet_client
        .addresses()
        .await?
        .into_iter()
        .next()
        .ok_or(ConnectError::NoAccount)?;
    let signature = wallet_client.sign_message(account, DEMO_MESSAGE).await?;
    let is_valid = public_client
        .verify_message(account, DEMO_MESSAGE, &signature)
        .await?;
    info!(%account, is_valid, "demo message signed and verified");
    Ok(SignedMessage { signature, is_valid })
}

/// Submit a prepared mint.
pub async fn submit_mint(
    session: &dyn WalletConnector,
    request: MintRequest,
) -> Result<Option<B256>, ConnectError> {
    session.send_transaction(request.chain_id, request.call).await
}

/// Switch to `chain_id` unless it is already active. Refuses while the
/// session reports a switch in flight; callers that can click twice claim the
/// switch with [`WalletExperience::begin_switch`] first. Returns whether a
/// switch was issued.
pub async fn switch_chain(session: &dyn WalletConnector, chain_id: ChainId) -> Result<bool, ConnectError> {
    let snapshot = session.snapshot();
    if let Some(pending) = snapshot.switch_status.pending_chain() {
        debug!(pending, requested = chain_id, "switch already in flight");
        return Err(ConnectError::SwitchInProgress(pending));
    }
    if !view::can_switch_to(&snapshot, chain_id) {
        return Ok(false);
    }
    session.switch_chain(chain_id).await?;
    Ok(true)
}
