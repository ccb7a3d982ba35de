use thiserror::Error;

pub type Result<T> = std::result::Result<T, AccountError>;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Conversion error: {0}")]
    ConversionError(String),
    #[error("Action error: {0}")]
    ActionError(String),
}
