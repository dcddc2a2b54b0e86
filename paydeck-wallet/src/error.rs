//! Error types for the wallet library

use thiserror::Error;

/// Custom error type for wallet operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),
}

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, Error>;
