use alloy::primitives::{Address, B256, Bytes};
use seqdemo_connect::{
    ChainSummary, ConnectError, SessionSnapshot, SignedMessage, SwitchStatus, Wallet,
    WalletExperience,
};
use seqdemo_ui::panels::WalletPanelData;

fn chains() -> Vec<ChainSummary> {
    vec![
        ChainSummary {
            id: 1,
            name: "Ethereum",
        },
        ChainSummary {
            id: 42_161,
            name: "Arbitrum One",
        },
    ]
}

fn connected(active_chain_id: u64) -> SessionSnapshot {
    SessionSnapshot {
        wallets: vec![
            Wallet {
                address: Address::repeat_byte(0x11),
                name: Some("Sequence".into()),
                is_active: true,
            },
            Wallet {
                address: Address::repeat_byte(0x22),
                name: None,
                is_active: false,
            },
        ],
        chains: chains(),
        active_chain_id: Some(active_chain_id),
        ..SessionSnapshot::default()
    }
}

fn data(snapshot: &SessionSnapshot, experience: &WalletExperience) -> WalletPanelData {
    WalletPanelData::from_session("Sequence Web SDK Demo", snapshot, experience)
}

#[test]
fn empty_session_shows_connect_card_only() {
    let snapshot = SessionSnapshot {
        chains: chains(),
        ..SessionSnapshot::default()
    };
    let d = data(&snapshot, &WalletExperience::new());
    assert!(d.show_empty_state);
    assert!(!d.show_chain_selector);
    assert_eq!(d.connect_label, "Connect Wallet");
    assert!(d.wallets.is_empty());
    assert_eq!(d.chain_count, 2);
}

#[test]
fn connected_session_lists_wallets() {
    let snapshot = connected(1);
    let d = data(&snapshot, &WalletExperience::new());
    assert!(!d.show_empty_state);
    assert!(d.show_chain_selector);
    assert_eq!(d.connect_label, "Connect another wallet");
    assert_eq!(d.wallets.len(), 2);
    assert_eq!(d.wallets[0].name, "Sequence");
    assert_eq!(d.wallets[1].name, "Unknown Wallet");
    assert!(d.wallets[0].is_active);
}

#[test]
fn active_chain_button_is_disabled() {
    let d = data(&connected(42_161), &WalletExperience::new());
    let arb = d.chain_buttons.iter().find(|b| b.chain_id == 42_161).unwrap();
    assert!(arb.disabled());
    assert_eq!(arb.label(), "Arbitrum One • Active");
    let eth = d.chain_buttons.iter().find(|b| b.chain_id == 1).unwrap();
    assert!(!eth.disabled());
}

#[test]
fn pending_switch_marks_target() {
    let mut snapshot = connected(1);
    snapshot.switch_status = SwitchStatus::Pending(42_161);
    let d = data(&snapshot, &WalletExperience::new());
    let arb = d.chain_buttons.iter().find(|b| b.chain_id == 42_161).unwrap();
    assert!(arb.is_pending);
    assert_eq!(arb.label(), "Arbitrum One…");
}

#[test]
fn failed_switch_only_clears_pending() {
    let mut snapshot = connected(1);
    snapshot.switch_status = SwitchStatus::Failed {
        chain_id: 42_161,
        message: "User rejected the request".into(),
    };
    let d = data(&snapshot, &WalletExperience::new());
    let arb = d.chain_buttons.iter().find(|b| b.chain_id == 42_161).unwrap();
    assert!(!arb.is_pending);
    assert!(!arb.disabled());
    assert_eq!(arb.label(), "Arbitrum One");
    assert_eq!(d.sign_error, None);
    assert_eq!(d.tx_status, None);
    assert!(!d.tx_is_error);
}

#[test]
fn claimed_switch_marks_target_pending() {
    let snapshot = connected(1);
    let mut experience = WalletExperience::new();
    assert_eq!(experience.begin_switch(&snapshot, 42_161), Ok(true));

    let d = data(&snapshot, &experience);
    let arb = d.chain_buttons.iter().find(|b| b.chain_id == 42_161).unwrap();
    assert!(arb.is_pending);
    assert!(arb.disabled());
}

#[test]
fn observing_new_wallet_mid_sign_resets_sign_card() {
    let snapshot = connected(42_161);
    let mut experience = WalletExperience::new();
    let ticket = experience.begin_sign(&snapshot).unwrap();
    let d = WalletPanelData::observe("Sequence Web SDK Demo", &snapshot, &mut experience);
    assert_eq!(d.sign_button.label, "Signing...");

    // Second wallet selected before the signature came back.
    let mut selected = snapshot.clone();
    selected.wallets[0].is_active = false;
    selected.wallets[1].is_active = true;
    let d = WalletPanelData::observe("Sequence Web SDK Demo", &selected, &mut experience);
    assert_eq!(d.sign_button.label, "Sign Message");
    assert!(!d.sign_button.disabled);

    let applied = experience.finish_sign(
        ticket,
        Ok(SignedMessage {
            signature: Bytes::from(vec![0xbe, 0xef]),
            is_valid: true,
        }),
    );
    assert!(!applied);
    let d = WalletPanelData::observe("Sequence Web SDK Demo", &selected, &mut experience);
    assert_eq!(d.signature, None);
    assert_eq!(d.signature_valid, None);
}

#[test]
fn observing_same_session_keeps_results() {
    let snapshot = connected(42_161);
    let mut experience = WalletExperience::new();
    let ticket = experience.begin_sign(&snapshot).unwrap();
    experience.finish_sign(
        ticket,
        Ok(SignedMessage {
            signature: Bytes::from(vec![0xde, 0xad]),
            is_valid: false,
        }),
    );

    let d = WalletPanelData::observe("Sequence Web SDK Demo", &snapshot, &mut experience);
    assert_eq!(d.signature.as_deref(), Some("0xdead"));
    assert_eq!(d.signature_valid, Some(false));
}

#[test]
fn mint_notice_and_disabled_button_off_arbitrum() {
    let d = data(&connected(1), &WalletExperience::new());
    assert_eq!(
        d.mint_notice,
        Some("Contract only available on Arbitrum One & Arbitrum Sepolia. Switch chain to test.")
    );
    assert!(d.mint_button.disabled);
    assert_eq!(d.mint_button.label, "Mint NFT");

    let d = data(&connected(42_161), &WalletExperience::new());
    assert_eq!(d.mint_notice, None);
    assert!(!d.mint_button.disabled);
}

#[test]
fn signing_then_signed_result() {
    let snapshot = connected(42_161);
    let mut experience = WalletExperience::new();
    let ticket = experience.begin_sign(&snapshot).unwrap();

    let d = data(&snapshot, &experience);
    assert_eq!(d.sign_button.label, "Signing...");
    assert!(d.sign_button.disabled);

    experience.finish_sign(
        ticket,
        Ok(SignedMessage {
            signature: Bytes::from(vec![0xde, 0xad]),
            is_valid: true,
        }),
    );
    let d = data(&snapshot, &experience);
    assert_eq!(d.sign_button.label, "Sign Message");
    assert_eq!(d.signature.as_deref(), Some("0xdead"));
    assert_eq!(d.signature_valid, Some(true));
    assert_eq!(d.sign_error, None);
}

#[test]
fn sign_error_is_shown() {
    let snapshot = connected(1);
    let mut experience = WalletExperience::new();
    let ticket = experience.begin_sign(&snapshot).unwrap();
    experience.finish_sign(ticket, Err(ConnectError::Rejected));

    let d = data(&snapshot, &experience);
    assert_eq!(d.sign_error.as_deref(), Some("User rejected the request"));
    assert_eq!(d.signature, None);
}

#[test]
fn submitted_mint_has_explorer_url() {
    let snapshot = connected(42_161);
    let mut experience = WalletExperience::new();
    let (ticket, _request) = experience.begin_mint(&snapshot).unwrap();

    let d = data(&snapshot, &experience);
    assert_eq!(d.tx_status.as_deref(), Some("Minting NFT..."));
    assert_eq!(d.mint_button.label, "Minting...");
    assert!(d.mint_button.disabled);

    experience.finish_mint(ticket, Ok(Some(B256::repeat_byte(0x0f))));
    let d = data(&snapshot, &experience);
    assert!(!d.tx_is_error);
    assert_eq!(
        d.explorer_url,
        Some(format!("https://arbiscan.io/tx/0x{}", "0f".repeat(32)))
    );
}

#[test]
fn failed_mint_is_flagged_as_error() {
    let snapshot = connected(42_161);
    let mut experience = WalletExperience::new();
    let (ticket, _request) = experience.begin_mint(&snapshot).unwrap();
    experience.finish_mint(ticket, Err(ConnectError::Rpc("insufficient funds".into())));

    let d = data(&snapshot, &experience);
    assert!(d.tx_is_error);
    assert_eq!(d.tx_status.as_deref(), Some("insufficient funds"));
    assert_eq!(d.explorer_url, None);
}
