//! Error types for pulpit library.

use std::io;
use thiserror::Error;

/// Result type alias for pulpit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating, parsing, or looking up content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level failure talking to a remote service.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A remote service answered, but not with something usable.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// No content generator is configured.
    #[error("No content generator configured")]
    NoBackend,

    /// The verse could not be found in the static table or from the provider.
    #[error("Verse not found: {0}")]
    VerseNotFound(String),

    /// Text that does not parse as a scripture reference.
    #[error("Invalid scripture reference: {0}")]
    InvalidReference(String),

    /// A request was missing parameters or carried malformed values.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error in the local state store.
    #[error("Store error: {0}")]
    Store(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Upstream(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::VerseNotFound("John 99:1".to_string());
        assert_eq!(err.to_string(), "Verse not found: John 99:1");

        let err = Error::NoBackend;
        assert_eq!(err.to_string(), "No content generator configured");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
