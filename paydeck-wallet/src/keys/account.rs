//! Chain accounts and signing handles

use ed25519_dalek::Signer as _;
use secp256k1::{Message, Secp256k1};

use crate::error::Result;

/// Supported chains
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Chain {
    /// Solana (ed25519)
    Solana,
    /// Ethereum and EVM compatible chains (secp256k1)
    Ethereum,
}

/// An opaque signing handle for a derived account.
///
/// Consumers use the handle for downstream transaction construction; the key
/// material itself is never exposed.
pub struct ChainSigner {
    inner: SignerInner,
}

enum SignerInner {
    Solana(ed25519_dalek::SigningKey),
    Ethereum(secp256k1::SecretKey),
}

impl ChainSigner {
    pub(crate) fn solana(key: ed25519_dalek::SigningKey) -> Self {
        Self {
            inner: SignerInner::Solana(key),
        }
    }

    pub(crate) fn ethereum(key: secp256k1::SecretKey) -> Self {
        Self {
            inner: SignerInner::Ethereum(key),
        }
    }

    /// Get the chain this signer belongs to
    pub fn chain(&self) -> Chain {
        match self.inner {
            SignerInner::Solana(_) => Chain::Solana,
            SignerInner::Ethereum(_) => Chain::Ethereum,
        }
    }

    /// Sign a message with the account key.
    ///
    /// Solana signs the raw message with ed25519. Ethereum signs the
    /// Keccak-256 digest of the message with deterministic ECDSA, compact
    /// encoding. Both produce 64-byte signatures.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        match &self.inner {
            SignerInner::Solana(key) => key.sign(message).to_bytes().to_vec(),
            SignerInner::Ethereum(key) => {
                let digest = super::ethereum::keccak256(message);
                let secp = Secp256k1::new();
                secp.sign_ecdsa(&Message::from_digest(digest), key)
                    .serialize_compact()
                    .to_vec()
            }
        }
    }
}

impl std::fmt::Debug for ChainSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainSigner")
            .field("chain", &self.chain())
            .finish_non_exhaustive()
    }
}

/// A derived account: display address plus signing handle.
///
/// Accounts are created on demand from the master key and never cached, so
/// there is no key material sitting in long-lived state between uses.
pub struct ChainAccount {
    chain: Chain,
    address: String,
    signer: ChainSigner,
}

impl ChainAccount {
    pub(crate) fn new(chain: Chain, address: String, signer: ChainSigner) -> Self {
        Self {
            chain,
            address,
            signer,
        }
    }

    /// Get the chain this account belongs to
    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// Get the display address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the signing handle
    pub fn signer(&self) -> &ChainSigner {
        &self.signer
    }

    /// Consume the account, keeping only the signing handle
    pub fn into_signer(self) -> ChainSigner {
        self.signer
    }
}

impl std::fmt::Debug for ChainAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainAccount")
            .field("chain", &self.chain)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Derive the account for a specific chain from the custody master key
pub fn derive_account(master_key_hex: &str, chain: Chain) -> Result<ChainAccount> {
    match chain {
        Chain::Solana => super::solana::derive_solana_account(master_key_hex),
        Chain::Ethereum => super::ethereum::derive_ethereum_account(master_key_hex),
    }
}
