//! Run error types.

use std::path::PathBuf;

use agenda_core::{CalendarError, HolidayError};
use agenda_pdf::RenderError;
use thiserror::Error;

/// Result type alias for a generation run.
pub type Result<T> = std::result::Result<T, AgendaError>;

/// Errors that abort a generation run. None of them is retried.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Unknown zone or unavailable school holiday data.
    #[error(transparent)]
    Holiday(#[from] HolidayError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("Cannot render the agenda: {0}")]
    Render(#[from] RenderError),

    #[error("Cannot write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error: AgendaError = CalendarError::InvalidYear(0).into();
        assert_eq!(error.to_string(), "Invalid year 0 (expected 1..=9999)");

        let error: AgendaError = RenderError::EmptyDocument.into();
        assert!(error.to_string().starts_with("Cannot render the agenda: "));

        let error = AgendaError::OutputWrite {
            path: PathBuf::from("/readonly/agenda-2026.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error.to_string(),
            "Cannot write /readonly/agenda-2026.pdf: denied"
        );
    }
}
