//! Error types for Volt

use thiserror::Error;

/// Main error type for Volt core operations
#[derive(Error, Debug)]
pub enum VoltError {
    /// Timer period must be at least one millisecond
    #[error("Invalid delay: {0}ms (must be greater than zero)")]
    InvalidDelay(u64),

    /// Phrase cycler was given nothing to cycle through
    #[error("Phrase list is empty")]
    EmptyPhrases,

    /// API base URL could not be used as a rewrite destination
    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Session file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Volt operations
pub type Result<T> = std::result::Result<T, VoltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_value() {
        assert_eq!(
            VoltError::InvalidDelay(0).to_string(),
            "Invalid delay: 0ms (must be greater than zero)"
        );
        assert_eq!(
            VoltError::InvalidApiUrl("ftp://x".into()).to_string(),
            "Invalid API URL: ftp://x"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: VoltError = io.into();
        assert!(matches!(err, VoltError::Io(_)));
    }
}
