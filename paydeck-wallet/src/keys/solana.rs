//! Solana account derivation

use ed25519_dalek::{SigningKey, VerifyingKey};

use super::account::{Chain, ChainAccount, ChainSigner};
use super::master::MasterKey;
use crate::error::Result;

/// Derive the Solana account for a custody master key.
///
/// The 32-byte seed slice is used directly as the ed25519 seed; the address
/// is the base58-encoded public key.
pub fn derive_solana_account(master_key_hex: &str) -> Result<ChainAccount> {
    let master = MasterKey::from_hex(master_key_hex)?;

    let signing_key = SigningKey::from_bytes(master.seed());
    let verifying_key = VerifyingKey::from(&signing_key);

    let address = bs58::encode(verifying_key.to_bytes()).into_string();

    Ok(ChainAccount::new(
        Chain::Solana,
        address,
        ChainSigner::solana(signing_key),
    ))
}
