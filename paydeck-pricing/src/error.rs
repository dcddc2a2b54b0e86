//! Error types for the pricing library

use thiserror::Error;

/// Custom error type for pricing operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Price fetch error: {0}")]
    PriceFetch(String),
}

/// Result type for pricing operations
pub type Result<T> = std::result::Result<T, Error>;
