use thiserror::Error;

/// Errors that can occur while serializing a document.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("Document has no pages")]
    EmptyDocument,
    #[error("Link from page {from} points to missing page {to}")]
    DanglingLink { from: usize, to: usize },
    #[error("Invalid line width {0} mm (expected a value in (0, 5])")]
    InvalidLineWidth(f32),
    #[error("Cannot compress page content: {0}")]
    Compression(String),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(
            RenderError::EmptyDocument.to_string(),
            "Document has no pages"
        );
        assert_eq!(
            RenderError::DanglingLink { from: 3, to: 400 }.to_string(),
            "Link from page 3 points to missing page 400"
        );
        assert_eq!(
            RenderError::InvalidLineWidth(-1.0).to_string(),
            "Invalid line width -1 mm (expected a value in (0, 5])"
        );
        assert_eq!(
            RenderError::Compression("out of memory".to_string()).to_string(),
            "Cannot compress page content: out of memory"
        );
    }
}
