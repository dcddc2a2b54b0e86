//! External spot-price providers

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Request timeout for the upstream feed; a timeout counts as a fetch failure
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// SOL and USDC spot prices quoted in USD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotPrices {
    pub sol_usd: f64,
    pub usdc_usd: f64,
}

/// External price provider trait
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the current SOL and USDC spot prices
    async fn fetch_spot_prices(&self) -> Result<SpotPrices>;
}

/// CoinGecko API provider implementation
pub struct CoinGeckoProvider {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl CoinGeckoProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url("https://api.coingecko.com/api/v3", api_key)
    }

    /// Point the provider at a different endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    async fn fetch_spot_prices(&self) -> Result<SpotPrices> {
        let url = format!(
            "{}/simple/price?ids=solana,usd-coin&vs_currencies=usd",
            self.base_url
        );

        let mut request = self.client.get(&url).timeout(FETCH_TIMEOUT);
        if let Some(ref api_key) = self.api_key {
            request = request.header("x-cg-demo-api-key", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::PriceFetch(format!("Failed to fetch prices: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::PriceFetch(format!(
                "API request failed with status: {}",
                response.status()
            )));
        }

        let data: SimplePriceResponse = response
            .json()
            .await
            .map_err(|e| Error::PriceFetch(format!("Failed to parse response: {}", e)))?;

        Ok(SpotPrices {
            sol_usd: data.solana.usd,
            usdc_usd: data.usd_coin.usd,
        })
    }
}

/// CoinGecko `simple/price` response document
#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    solana: CoinPrice,
    #[serde(rename = "usd-coin")]
    usd_coin: CoinPrice,
}

#[derive(Debug, Deserialize)]
struct CoinPrice {
    usd: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_price_response() {
        let body = r#"{"solana":{"usd":152.34},"usd-coin":{"usd":0.9998}}"#;
        let parsed: SimplePriceResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.solana.usd, 152.34);
        assert_eq!(parsed.usd_coin.usd, 0.9998);
    }

    #[test]
    fn test_missing_coin_is_an_error() {
        let body = r#"{"solana":{"usd":152.34}}"#;
        assert!(serde_json::from_str::<SimplePriceResponse>(body).is_err());
    }
}
