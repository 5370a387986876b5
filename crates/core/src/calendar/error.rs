use thiserror::Error;

/// Errors raised while enumerating the days of a year.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid year {0} (expected 1..=9999)")]
    InvalidYear(i32),
    #[error("Invalid month {0} (expected 1..=12)")]
    InvalidMonth(u32),
}

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_error_display() {
        assert_eq!(
            CalendarError::InvalidYear(0).to_string(),
            "Invalid year 0 (expected 1..=9999)"
        );
        assert_eq!(
            CalendarError::InvalidMonth(13).to_string(),
            "Invalid month 13 (expected 1..=12)"
        );
    }
}
