//! Paydeck Wallet - multi-chain key derivation
//!
//! This library derives chain-specific signing identities (Solana ed25519,
//! Ethereum secp256k1) from the single raw private key issued by the
//! key-custody provider for a session. Derivation is deterministic and
//! stateless: the same custody key always yields the same addresses, on any
//! device, and nothing is cached between calls.

pub mod error;
pub mod keys;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use keys::{derive_account, Chain, ChainAccount, ChainSigner, MasterKey};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
