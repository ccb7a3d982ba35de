use crate::domain::ports::CurrencyConverter;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.frankfurter.app";

/// Conversion backend talking to the Frankfurter exchange-rate API.
///
/// Issues a single GET per lookup and reads the USD amount out of the JSON
/// body. Transport and parse errors both reject the lookup.
pub struct FrankfurterConverter {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    rates: Rates,
}

#[derive(Debug, Deserialize)]
struct Rates {
    #[serde(rename = "USD")]
    usd: Decimal,
}

impl FrankfurterConverter {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL.to_string())
    }

    /// Creates a converter against a different base URL, e.g. a local stub.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn latest_url(&self, amount: Decimal, currency: &str) -> String {
        format!(
            "{}/latest?amount={}&from={}&to=USD",
            self.base_url, amount, currency
        )
    }
}

impl Default for FrankfurterConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CurrencyConverter for FrankfurterConverter {
    async fn to_usd(&self, amount: Decimal, currency: &str) -> Result<Decimal> {
        let url = self.latest_url(amount, currency);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: LatestResponse = response.json().await?;
        Ok(body.rates.usd)
    }
}
