use thiserror::Error;

/// Errors raised while resolving holidays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolidayError {
    #[error("Unknown {kind} zone: {value} (expected one of: {expected})")]
    InvalidZone {
        kind: &'static str,
        value: String,
        expected: String,
    },
    #[error("Holiday data source failed: {0}")]
    DataSource(String),
}

/// Result type for holiday operations.
pub type Result<T> = std::result::Result<T, HolidayError>;
