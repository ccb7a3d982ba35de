use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Converts an amount in a foreign currency into USD.
///
/// The lookup is the only side effect the engine performs, so it sits behind
/// this trait and tests can substitute a deterministic stub.
#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    async fn to_usd(&self, amount: Decimal, currency: &str) -> Result<Decimal>;
}

pub type CurrencyConverterBox = Box<dyn CurrencyConverter>;
