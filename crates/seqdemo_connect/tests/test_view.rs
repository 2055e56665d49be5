mod common;

use common::{MockConnector, alice, bob};
use seqdemo_chain::{ARBITRUM_ONE, ARBITRUM_SEPOLIA, ETHEREUM, POLYGON};
use seqdemo_connect::view::*;
use seqdemo_connect::{SwitchStatus, WalletConnector, WalletExperience};

#[test]
fn empty_session_shows_empty_state_and_no_selector() {
    let snapshot = MockConnector::new().snapshot();
    assert!(shows_empty_state(&snapshot));
    assert!(!show_chain_selector(&snapshot));
    assert_eq!(connect_button_label(&snapshot), "Connect Wallet");
}

#[test]
fn connected_session_shows_list_and_selector() {
    let snapshot = MockConnector::new().with_wallet(alice(), None).snapshot();
    assert!(!shows_empty_state(&snapshot));
    assert!(show_chain_selector(&snapshot));
    assert_eq!(connect_button_label(&snapshot), "Connect another wallet");
}

#[test]
fn selector_hidden_without_chains() {
    let snapshot = MockConnector::new()
        .with_wallet(alice(), None)
        .with_no_chains()
        .snapshot();
    assert!(!show_chain_selector(&snapshot));
}

#[test]
fn exactly_one_active_wallet_in_list() {
    let session = MockConnector::new()
        .with_wallet(alice(), Some("Sequence"))
        .with_wallet(bob(), None);
    let wallets = session.wallets();
    assert_eq!(wallets.iter().filter(|w| w.is_active).count(), 1);
    assert_eq!(wallet_display_name(&wallets[0]), "Sequence");
    assert_eq!(wallet_display_name(&wallets[1]), "Unknown Wallet");
}

#[test]
fn chain_buttons_mark_active_and_pending() {
    let session = MockConnector::new().with_wallet(alice(), None);
    session.set_switch_status(SwitchStatus::Pending(ETHEREUM));
    let snapshot = session.snapshot();
    let buttons = chain_buttons(&snapshot, &WalletExperience::new());

    let ids: Vec<_> = buttons.iter().map(|b| b.chain_id).collect();
    assert_eq!(ids, vec![ARBITRUM_SEPOLIA, ARBITRUM_ONE, ETHEREUM, POLYGON]);

    let active = &buttons[0];
    assert!(active.disabled());
    assert_eq!(active.label(), "Arbitrum Sepolia • Active");

    let idle = &buttons[1];
    assert!(!idle.disabled());
    assert_eq!(idle.label(), "Arbitrum One");

    let pending = &buttons[2];
    assert!(pending.disabled());
    assert_eq!(pending.label(), "Ethereum…");
}

#[test]
fn claimed_switch_shows_pending_before_session_reports_it() {
    let session = MockConnector::new().with_wallet(alice(), None);
    let snapshot = session.snapshot();
    let mut experience = WalletExperience::new();
    assert_eq!(experience.begin_switch(&snapshot, ARBITRUM_ONE), Ok(true));

    assert!(!snapshot.switch_status.is_pending());
    let buttons = chain_buttons(&snapshot, &experience);
    let target = buttons.iter().find(|b| b.chain_id == ARBITRUM_ONE).unwrap();
    assert!(target.is_pending);
    assert!(target.disabled());
    assert_eq!(target.label(), "Arbitrum One…");
}

#[test]
fn can_switch_only_to_idle_configured_chains() {
    let session = MockConnector::new().with_wallet(alice(), None);
    session.set_switch_status(SwitchStatus::Pending(ETHEREUM));
    let snapshot = session.snapshot();
    assert!(can_switch_to(&snapshot, ARBITRUM_ONE));
    assert!(!can_switch_to(&snapshot, ARBITRUM_SEPOLIA));
    assert!(!can_switch_to(&snapshot, ETHEREUM));
    assert!(!can_switch_to(&snapshot, 11_155_111));
}

#[test]
fn mint_notice_on_unsupported_chain() {
    let on_eth = MockConnector::new()
        .with_wallet(alice(), None)
        .with_chain(Some(ETHEREUM))
        .snapshot();
    assert_eq!(
        mint_notice(&on_eth),
        Some("Contract only available on Arbitrum One & Arbitrum Sepolia. Switch chain to test.")
    );
    let exp = WalletExperience::new();
    let button = mint_button(&exp, &on_eth);
    assert!(button.disabled);
    assert_eq!(button.label, "Mint NFT");

    let on_arb = MockConnector::new()
        .with_wallet(alice(), None)
        .with_chain(Some(ARBITRUM_ONE))
        .snapshot();
    assert_eq!(mint_notice(&on_arb), None);
    assert!(!mint_button(&exp, &on_arb).disabled);
}

#[test]
fn buttons_reflect_in_flight_work() {
    let snapshot = MockConnector::new().with_wallet(alice(), None).snapshot();
    let mut exp = WalletExperience::new();
    assert_eq!(sign_button(&exp).label, "Sign Message");

    exp.begin_sign(&snapshot).unwrap();
    let sign = sign_button(&exp);
    assert_eq!(sign.label, "Signing...");
    assert!(sign.disabled);

    exp.begin_mint(&snapshot).unwrap();
    let mint = mint_button(&exp, &snapshot);
    assert_eq!(mint.label, "Minting...");
    assert!(mint.disabled);
}
