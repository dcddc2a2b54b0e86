//! Display-currency conversion and formatting

use std::sync::Arc;

use crate::service::PriceService;

/// Currencies the dashboard can quote amounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Sol,
    Usdc,
}

/// Converts stored amounts into the session's display currency.
///
/// The display currency is a presentation setting only; underlying amounts
/// are never mutated. Conversion rates come from the shared
/// [`PriceService`], which self-refreshes on staleness, so the converter
/// needs no timer of its own.
pub struct CurrencyConverter {
    service: Arc<PriceService>,
    display: Currency,
}

impl CurrencyConverter {
    /// Create a converter displaying USD
    pub fn new(service: Arc<PriceService>) -> Self {
        Self::with_display_currency(service, Currency::Usd)
    }

    /// Create a converter with an explicit display currency
    pub fn with_display_currency(service: Arc<PriceService>, display: Currency) -> Self {
        Self { service, display }
    }

    /// The currently selected display currency
    pub fn display_currency(&self) -> Currency {
        self.display
    }

    /// Change the session's display currency
    pub fn set_display_currency(&mut self, currency: Currency) {
        self.display = currency;
    }

    /// Convert an amount of `from` into the display currency
    pub async fn convert_amount(&self, amount: f64, from: Currency) -> f64 {
        if from == self.display {
            return amount;
        }

        let snapshot = self.service.get_prices().await;

        match (from, self.display) {
            (Currency::Sol, Currency::Usd) => snapshot.convert_to_usd(amount, Currency::Sol),
            (Currency::Usdc, Currency::Usd) => snapshot.convert_to_usd(amount, Currency::Usdc),
            (Currency::Sol, Currency::Usdc) => snapshot.sol_to_usdc(amount),
            (Currency::Usdc, Currency::Sol) => snapshot.usdc_to_sol(amount),
            (Currency::Usd, to) => amount / snapshot.price_usd(to),
            // from == display, handled above
            (Currency::Sol, Currency::Sol) | (Currency::Usdc, Currency::Usdc) => amount,
        }
    }

    /// Convert an amount and format it for display.
    ///
    /// USD and USDC round to 2 decimal places, SOL to 4. Rounding happens
    /// only here, never inside the conversions.
    pub async fn format_amount(&self, amount: f64, from: Currency) -> String {
        let converted = self.convert_amount(amount, from).await;

        match self.display {
            Currency::Usd => format!("${:.2}", converted),
            Currency::Usdc => format!("{:.2} USDC", converted),
            Currency::Sol => format!("{:.4} SOL", converted),
        }
    }
}
