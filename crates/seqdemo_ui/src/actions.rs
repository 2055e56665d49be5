use alloy::primitives::Address;
use gpui::*;

// ---------------------------------------------------------------------------
// Zero-sized actions
// ---------------------------------------------------------------------------

actions!(
    seqdemo,
    [
        OpenConnectPrompt,
        CloseConnectPrompt,
        CreateTestWallet,
        SignMessage,
        MintNft,
    ]
);

// ---------------------------------------------------------------------------
// Data-carrying actions
// ---------------------------------------------------------------------------

/// Make a connected wallet the active one.
#[derive(Clone, PartialEq, gpui::Action)]
#[action(namespace = seqdemo, no_json)]
pub struct SelectWallet {
    pub address: Address,
}

#[derive(Clone, PartialEq, gpui::Action)]
#[action(namespace = seqdemo, no_json)]
pub struct DisconnectWallet {
    pub address: Address,
}

#[derive(Clone, PartialEq, gpui::Action)]
#[action(namespace = seqdemo, no_json)]
pub struct SwitchChain {
    pub chain_id: u64,
}

/// Open a transaction page in the system browser.
#[derive(Clone, PartialEq, gpui::Action)]
#[action(namespace = seqdemo, no_json)]
pub struct OpenExplorer {
    pub url: String,
}
