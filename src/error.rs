//! Error types for the sopdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for sopdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a document artifact.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing the artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The request body is not valid JSON or does not match the content model.
    #[error("Malformed document description: {0}")]
    Json(#[from] serde_json::Error),

    /// The document contains no sections at all.
    #[error("Document has no sections")]
    EmptyDocument,

    /// The underlying package writer failed to serialize the document.
    ///
    /// This is the only non-recoverable rendering failure: individual
    /// malformed items degrade gracefully (skip, clamp, pad), but a broken
    /// output container aborts the whole render.
    #[error("Document packaging error: {0}")]
    Pack(String),
}

impl From<docx_rs::DocxError> for Error {
    fn from(err: docx_rs::DocxError) -> Self {
        Error::Pack(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyDocument;
        assert_eq!(err.to_string(), "Document has no sections");

        let err = Error::Pack("zip closed".to_string());
        assert_eq!(err.to_string(), "Document packaging error: zip closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
