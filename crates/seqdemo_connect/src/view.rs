//! Pure derivations from session and experience state to what the demo page
//! shows. No rendering happens here.

use alloy::primitives::Address;

use seqdemo_chain::{ChainId, is_mint_enabled};

use crate::experience::WalletExperience;
use crate::session::{SessionSnapshot, Wallet};

pub const UNKNOWN_WALLET_NAME: &str = "Unknown Wallet";
pub const EMPTY_WALLETS_TITLE: &str = "No wallets connected";
pub const CONNECT_WALLET_LABEL: &str = "Connect Wallet";
pub const CONNECT_ANOTHER_LABEL: &str = "Connect another wallet";
pub const MINT_UNAVAILABLE_NOTICE: &str =
    "Contract only available on Arbitrum One & Arbitrum Sepolia. Switch chain to test.";

/// `0x1234…abcd` form of an address. Uses the checksummed spelling.
pub fn format_address(address: &Address) -> String {
    let full = address.to_checksum(None);
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

pub fn wallet_display_name(wallet: &Wallet) -> &str {
    wallet
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(UNKNOWN_WALLET_NAME)
}

/// The empty-state card replaces the wallet list when nothing is connected.
pub fn shows_empty_state(snapshot: &SessionSnapshot) -> bool {
    snapshot.wallets.is_empty()
}

/// Label of the button that opens the connect modal.
pub fn connect_button_label(snapshot: &SessionSnapshot) -> &'static str {
    if shows_empty_state(snapshot) {
        CONNECT_WALLET_LABEL
    } else {
        CONNECT_ANOTHER_LABEL
    }
}

// ---------------------------------------------------------------------------
// Chain selector
// ---------------------------------------------------------------------------

pub fn show_chain_selector(snapshot: &SessionSnapshot) -> bool {
    !snapshot.chains.is_empty() && !snapshot.wallets.is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainButton {
    pub chain_id: ChainId,
    pub name: &'static str,
    pub is_active: bool,
    pub is_pending: bool,
}

impl ChainButton {
    pub fn disabled(&self) -> bool {
        self.is_active || self.is_pending
    }

    pub fn label(&self) -> String {
        if self.is_active {
            format!("{} • Active", self.name)
        } else if self.is_pending {
            format!("{}…", self.name)
        } else {
            self.name.to_string()
        }
    }
}

/// One button per configured chain. A switch counts as pending from the
/// moment it is claimed, before the session reports it.
pub fn chain_buttons(snapshot: &SessionSnapshot, experience: &WalletExperience) -> Vec<ChainButton> {
    let pending = experience
        .pending_switch()
        .or_else(|| snapshot.switch_status.pending_chain());
    snapshot
        .chains
        .iter()
        .map(|c| ChainButton {
            chain_id: c.id,
            name: c.name,
            is_active: snapshot.active_chain_id == Some(c.id),
            is_pending: pending == Some(c.id),
        })
        .collect()
}

/// Whether clicking the button for `chain_id` should issue a switch.
pub fn can_switch_to(snapshot: &SessionSnapshot, chain_id: ChainId) -> bool {
    snapshot.chains.iter().any(|c| c.id == chain_id)
        && snapshot.active_chain_id != Some(chain_id)
        && snapshot.switch_status.pending_chain() != Some(chain_id)
}

// ---------------------------------------------------------------------------
// Sign and mint cards
// ---------------------------------------------------------------------------

/// Label and enabled state of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub label: &'static str,
    pub disabled: bool,
}

pub fn sign_button(experience: &WalletExperience) -> ButtonState {
    let signing = experience.is_signing();
    ButtonState {
        label: if signing { "Signing..." } else { "Sign Message" },
        disabled: signing,
    }
}

pub fn mint_available(snapshot: &SessionSnapshot) -> bool {
    snapshot.active_chain_id.is_some_and(is_mint_enabled)
}

/// Warning shown on the mint card when the active chain has no contract.
pub fn mint_notice(snapshot: &SessionSnapshot) -> Option<&'static str> {
    (!mint_available(snapshot)).then_some(MINT_UNAVAILABLE_NOTICE)
}

pub fn mint_button(experience: &WalletExperience, snapshot: &SessionSnapshot) -> ButtonState {
    let minting = experience.is_minting();
    ButtonState {
        label: if minting { "Minting..." } else { "Mint NFT" },
        disabled: minting || !mint_available(snapshot),
    }
}
