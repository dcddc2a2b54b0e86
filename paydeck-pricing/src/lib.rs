//! Paydeck Pricing - spot-price cache and currency conversion
//!
//! This library keeps a time-boxed cache of SOL and USDC spot prices fetched
//! from an upstream feed and converts amounts between SOL, USDC, and USD for
//! display. Lookups never fail: when the feed is unreachable the last known
//! snapshot is served, and when no snapshot exists yet a fixed fallback
//! table is served instead, trading accuracy for availability.

pub mod clock;
pub mod convert;
pub mod error;
pub mod provider;
pub mod service;

// Re-export commonly used types for convenience
pub use clock::{Clock, SystemClock};
pub use convert::{Currency, CurrencyConverter};
pub use error::{Error, Result};
pub use provider::{CoinGeckoProvider, PriceProvider, SpotPrices};
pub use service::{
    PriceService, PriceSnapshot, CACHE_DURATION_MS, FALLBACK_SOL_USD, FALLBACK_USDC_USD,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
