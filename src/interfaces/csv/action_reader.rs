use crate::domain::action::Action;
use crate::error::{AccountError, Result};
use std::io::Read;

/// Reads account actions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Action>`. It handles whitespace trimming and flexible record
/// lengths automatically, so payload columns can be left empty for actions
/// that carry none.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes actions.
    pub fn actions(self) -> impl Iterator<Item = Result<Action>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AccountError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::ActionType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "type, amount, currency, purpose\nopen, , , \ndeposit, 100.5, USD, ";
        let reader = ActionReader::new(data.as_bytes());
        let results: Vec<Result<Action>> = reader.actions().collect();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().r#type, ActionType::Open);
        let deposit = results[1].as_ref().unwrap();
        assert_eq!(deposit.amount, Some(dec!(100.5)));
        assert_eq!(deposit.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "type, amount, currency, purpose\ntransmogrify, 1.0, , ";
        let reader = ActionReader::new(data.as_bytes());
        let results: Vec<Result<Action>> = reader.actions().collect();

        assert!(results[0].is_err());
    }
}
