//! Key derivation and account handling
//!
//! This module turns the custody-provider master key into chain-specific
//! accounts for the chains the dashboard supports.

pub mod ethereum;
pub mod solana;

mod account;
mod master;

pub use account::{derive_account, Chain, ChainAccount, ChainSigner};
pub use master::MasterKey;
