//! School holiday source error types.

use agenda_core::HolidayError;
use thiserror::Error;

/// Result type alias for source module.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while fetching school holiday data.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No school holidays for zone {zone} in {year}")]
    NotCovered { zone: String, year: i32 },
}

impl From<SourceError> for HolidayError {
    fn from(error: SourceError) -> Self {
        HolidayError::DataSource(error.to_string())
    }
}
