pub mod wallet_row;

pub use wallet_row::{WalletRowData, render_wallet_row};
