//! EIP-191 personal-message signatures and the ERC-1271 contract fallback.
//!
//! Externally owned accounts are checked by recovering the signer locally.
//! Smart-contract wallets cannot be recovered that way; for those the caller
//! asks the wallet contract itself via [`is_valid_signature_call`].

use alloy::primitives::{Address, B256, Bytes, Signature, eip191_hash_message};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::error::ChainError;

/// The fixed message the demo asks wallets to sign.
pub const DEMO_MESSAGE: &str = "Sequence Web SDK demo signature";

/// Return value of `isValidSignature` for a valid signature.
pub const ERC1271_MAGIC_VALUE: [u8; 4] = [0x16, 0x26, 0xba, 0x7e];

sol! {
    function isValidSignature(bytes32 hash, bytes signature) external view returns (bytes4 magicValue);
}

/// Hash signed by `personal_sign` for `message`.
pub fn message_hash(message: &str) -> B256 {
    eip191_hash_message(message)
}

/// Recover the address that produced `signature` over `message`.
pub fn recover_signer(message: &str, signature: &[u8]) -> Result<Address, ChainError> {
    let sig = Signature::from_raw(signature)
        .map_err(|e| ChainError::InvalidSignature(e.to_string()))?;
    sig.recover_address_from_msg(message)
        .map_err(|e| ChainError::InvalidSignature(e.to_string()))
}

/// Whether `signature` over `message` recovers to `address`. Malformed
/// signatures are simply not signed by anyone.
pub fn is_signed_by(address: Address, message: &str, signature: &[u8]) -> bool {
    matches!(recover_signer(message, signature), Ok(signer) if signer == address)
}

/// Calldata for `isValidSignature(hash(message), signature)`.
pub fn is_valid_signature_call(message: &str, signature: &[u8]) -> Bytes {
    let call = isValidSignatureCall {
        hash: message_hash(message),
        signature: Bytes::copy_from_slice(signature),
    };
    Bytes::from(call.abi_encode())
}

/// Whether an `isValidSignature` return blob carries the magic value.
pub fn is_erc1271_magic(returned: &[u8]) -> bool {
    returned.len() >= 4 && returned[..4] == ERC1271_MAGIC_VALUE
}
