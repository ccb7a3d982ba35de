use crate::domain::account::Account;
use crate::error::Result;
use std::io::Write;

/// Writes the final account record as CSV.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_account(&mut self, account: &Account) -> Result<()> {
        self.writer.serialize(account)?;
        self.writer.flush()?;
        Ok(())
    }
}
