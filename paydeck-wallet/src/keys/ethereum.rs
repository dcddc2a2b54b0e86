//! Ethereum account derivation

use secp256k1::{PublicKey, Secp256k1, SecretKey};

use super::account::{Chain, ChainAccount, ChainSigner};
use super::master::MasterKey;
use crate::error::{Error, Result};

/// Derive the Ethereum account for a custody master key.
///
/// The same 32-byte slice that seeds the Solana account is interpreted as a
/// secp256k1 private key. Reusing one slice across two unrelated curves is a
/// known weakness (a domain-separated KDF per chain would be stronger), but
/// the mapping must stay byte-for-byte as is: previously derived addresses
/// depend on it.
pub fn derive_ethereum_account(master_key_hex: &str) -> Result<ChainAccount> {
    let master = MasterKey::from_hex(master_key_hex)?;

    let secp = Secp256k1::new();
    let secret_key = SecretKey::from_slice(master.seed())
        .map_err(|e| Error::KeyDerivation(format!("Invalid secret key: {}", e)))?;
    let public_key = PublicKey::from_secret_key(&secp, &secret_key);

    let address = public_key_to_address(&public_key);

    Ok(ChainAccount::new(
        Chain::Ethereum,
        address,
        ChainSigner::ethereum(secret_key),
    ))
}

/// Get the Ethereum address for a secp256k1 public key
fn public_key_to_address(public_key: &PublicKey) -> String {
    let uncompressed = public_key.serialize_uncompressed();

    // Skip the first byte (0x04) and hash the rest
    let key_hash = keccak256(&uncompressed[1..]);

    // Take the last 20 bytes of the hash
    format!("0x{}", hex::encode(&key_hash[12..]))
}

/// Calculate the Keccak-256 hash of data
pub(crate) fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
