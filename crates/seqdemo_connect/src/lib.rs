//! Wallet session seam, the local connect provider, and the wallet-experience
//! state machine the UI renders.

pub mod error;
pub mod experience;
pub mod provider;
pub mod session;
pub mod view;

pub use error::ConnectError;
pub use experience::{
    MintRequest, MintStatus, RequestTicket, SignStatus, SignedMessage, WalletExperience,
    sign_demo_message, submit_mint, switch_chain,
};
pub use provider::{ConnectProvider, LocalWalletClient, RpcPublicClient};
pub use session::{
    ChainSummary, IdentityKey, PublicClient, SessionSnapshot, SwitchStatus, Wallet, WalletClient,
    WalletConnector, WalletOnboarding,
};
