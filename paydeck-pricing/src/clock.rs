//! Time source abstraction

use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond time source for staleness checks.
///
/// Injected into [`PriceService`](crate::PriceService) so tests can drive
/// the cache window with a fake clock.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// Wall-clock implementation used outside of tests
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
