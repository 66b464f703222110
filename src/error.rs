//! Error types for the notekeeper service
//!
//! Domain failures (`InvalidInput`, `NotFound`) come from the note store and are
//! mapped to HTTP statuses by the API layer. The remaining variants only occur
//! while loading configuration or starting the server.

use crate::types::NoteId;
use thiserror::Error;

/// Main error type for notekeeper operations
#[derive(Error, Debug)]
pub enum NoteError {
    /// Title or content missing/empty
    #[error("Title and content are required")]
    InvalidInput,

    /// No note with this id exists (or it was deleted)
    #[error("Note not found")]
    NotFound(NoteId),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for notekeeper operations
pub type Result<T> = std::result::Result<T, NoteError>;

/// Convert anyhow::Error to NoteError
impl From<anyhow::Error> for NoteError {
    fn from(err: anyhow::Error) -> Self {
        NoteError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NoteError::NotFound(NoteId(7)).to_string(), "Note not found");
        assert_eq!(
            NoteError::InvalidInput.to_string(),
            "Title and content are required"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: NoteError = config::ConfigError::Message("bad addr".to_string()).into();
        assert!(matches!(err, NoteError::Config(_)));

        let err: NoteError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
