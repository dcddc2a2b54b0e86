//! Price cache service
//!
//! Owns the single shared snapshot of spot prices. The service is
//! constructed once at application start-up and handed to whoever needs a
//! conversion; there is no hidden global instance.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::convert::Currency;
use crate::provider::PriceProvider;

/// How long a snapshot is served without hitting the network
pub const CACHE_DURATION_MS: u64 = 60_000;

/// Fallback SOL price when no live or cached data is available
pub const FALLBACK_SOL_USD: f64 = 200.0;

/// Fallback USDC price when no live or cached data is available
pub const FALLBACK_USDC_USD: f64 = 1.0;

/// A cached price table plus its fetch timestamp.
///
/// `fetched_at_ms` is monotonically non-decreasing across successful
/// fetches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub sol_usd: f64,
    pub usdc_usd: f64,
    pub fetched_at_ms: u64,
}

impl PriceSnapshot {
    /// USD price of one unit of the given currency
    pub fn price_usd(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => 1.0,
            Currency::Sol => self.sol_usd,
            Currency::Usdc => self.usdc_usd,
        }
    }

    /// Convert an amount of the given currency to USD.
    ///
    /// No rounding is applied here or in the other conversions; display
    /// rounding is a presentation concern layered on top.
    pub fn convert_to_usd(&self, amount: f64, from: Currency) -> f64 {
        amount * self.price_usd(from)
    }

    /// Convert a SOL amount to USDC through the USD cross rate
    pub fn sol_to_usdc(&self, amount: f64) -> f64 {
        (amount * self.sol_usd) / self.usdc_usd
    }

    /// Convert a USDC amount to SOL through the USD cross rate
    pub fn usdc_to_sol(&self, amount: f64) -> f64 {
        (amount * self.usdc_usd) / self.sol_usd
    }
}

/// Spot-price cache with bounded staleness.
///
/// Lookups serve the cached snapshot while it is fresh, refetch once it goes
/// stale, and absorb fetch failures by serving stale-or-fallback data. The
/// cache slot mutex is held across the in-flight fetch, so concurrent
/// callers that observe a stale snapshot queue up behind one network call
/// instead of issuing duplicates.
pub struct PriceService {
    provider: Arc<dyn PriceProvider>,
    clock: Arc<dyn Clock>,
    cache_duration_ms: u64,
    snapshot: Mutex<Option<PriceSnapshot>>,
}

impl PriceService {
    /// Create a price service over the given provider with the default
    /// cache duration and wall clock
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        Self::with_clock(provider, Arc::new(SystemClock))
    }

    /// Create a price service with an explicit time source
    pub fn with_clock(provider: Arc<dyn PriceProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            provider,
            clock,
            cache_duration_ms: CACHE_DURATION_MS,
            snapshot: Mutex::new(None),
        }
    }

    /// Override the staleness window
    pub fn with_cache_duration(mut self, cache_duration_ms: u64) -> Self {
        self.cache_duration_ms = cache_duration_ms;
        self
    }

    /// Get current prices, refreshing the cache if it is stale.
    ///
    /// Never fails: on fetch errors the previous snapshot is served
    /// unchanged, and when none exists yet the static fallback table is
    /// returned. The fallback is not stored, so the next call retries the
    /// feed.
    pub async fn get_prices(&self) -> PriceSnapshot {
        let mut slot = self.snapshot.lock().await;
        let now = self.clock.now_millis();

        if let Some(snapshot) = *slot {
            let age_ms = now.saturating_sub(snapshot.fetched_at_ms);
            if age_ms < self.cache_duration_ms {
                debug!(age_ms, "serving cached prices");
                return snapshot;
            }
        }

        match self.provider.fetch_spot_prices().await {
            Ok(prices) => {
                // Clamp against the previous snapshot so fetched_at_ms never
                // moves backwards
                let fetched_at_ms = match *slot {
                    Some(prev) => now.max(prev.fetched_at_ms),
                    None => now,
                };
                let snapshot = PriceSnapshot {
                    sol_usd: prices.sol_usd,
                    usdc_usd: prices.usdc_usd,
                    fetched_at_ms,
                };
                *slot = Some(snapshot);
                debug!(sol_usd = prices.sol_usd, usdc_usd = prices.usdc_usd, "refreshed prices");
                snapshot
            }
            Err(e) => {
                if let Some(snapshot) = *slot {
                    warn!(error = %e, "price fetch failed, serving stale snapshot");
                    snapshot
                } else {
                    warn!(error = %e, "price fetch failed with no snapshot, serving fallback prices");
                    PriceSnapshot {
                        sol_usd: FALLBACK_SOL_USD,
                        usdc_usd: FALLBACK_USDC_USD,
                        fetched_at_ms: now,
                    }
                }
            }
        }
    }

    /// Convert an amount of the given currency to USD at current prices
    pub async fn convert_to_usd(&self, amount: f64, from: Currency) -> f64 {
        self.get_prices().await.convert_to_usd(amount, from)
    }

    /// Convert a SOL amount to USDC at current prices
    pub async fn convert_sol_to_usdc(&self, amount: f64) -> f64 {
        self.get_prices().await.sol_to_usdc(amount)
    }

    /// Convert a USDC amount to SOL at current prices
    pub async fn convert_usdc_to_sol(&self, amount: f64) -> f64 {
        self.get_prices().await.usdc_to_sol(amount)
    }
}
