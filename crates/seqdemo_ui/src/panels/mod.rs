pub mod wallet_experience;

pub use wallet_experience::{WalletExperiencePanel, WalletPanelData};
