use crate::domain::ports::CurrencyConverter;
use crate::error::{AccountError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A deterministic conversion backend with a static rate table.
///
/// Used for tests and offline runs where hitting the real conversion API is
/// not wanted. Currencies without a configured rate fail the lookup, which
/// exercises the rejected-deposit path.
#[derive(Default, Clone)]
pub struct FixedRateConverter {
    rates: HashMap<String, Decimal>,
}

impl FixedRateConverter {
    /// Creates a converter with an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a USD rate for `currency`.
    pub fn with_rate(mut self, currency: &str, rate: Decimal) -> Self {
        self.rates.insert(currency.to_string(), rate);
        self
    }
}

#[async_trait]
impl CurrencyConverter for FixedRateConverter {
    async fn to_usd(&self, amount: Decimal, currency: &str) -> Result<Decimal> {
        let rate = self
            .rates
            .get(currency)
            .ok_or_else(|| AccountError::ConversionError(format!("no rate for {currency}")))?;
        Ok(amount * rate)
    }
}
