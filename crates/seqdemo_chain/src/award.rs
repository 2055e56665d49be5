use alloy::primitives::{Address, Bytes, address};
use alloy::sol;
use alloy::sol_types::SolCall;

/// Demo collectible contract, deployed on Arbitrum One and Arbitrum Sepolia.
pub const MINT_CONTRACT_ADDRESS: Address = address!("0x0d402C63cAe0200F0723B3e6fa0914627a48462E");

/// Metadata URI every demo mint points at.
pub const DEMO_TOKEN_URI: &str =
    "https://dev-metadata.sequence.app/projects/277/collections/62/tokens/0.json";

sol! {
    function awardItem(address player, string tokenURI) external returns (uint256 tokenId);
}

/// Destination and calldata for a contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub to: Address,
    pub data: Bytes,
}

/// `awardItem(recipient, DEMO_TOKEN_URI)` on the demo contract.
pub fn award_item_call(recipient: Address) -> ContractCall {
    let call = awardItemCall {
        player: recipient,
        tokenURI: DEMO_TOKEN_URI.to_string(),
    };
    ContractCall {
        to: MINT_CONTRACT_ADDRESS,
        data: Bytes::from(call.abi_encode()),
    }
}
