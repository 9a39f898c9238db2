//! Error types for the idcr-core library.
//!
//! Field extraction itself is infallible (a missing field is an empty
//! string, not an error); errors only arise at the input boundary when
//! reading or decoding an OCR line payload.

use thiserror::Error;

/// Main error type for the idcr library.
#[derive(Error, Debug)]
pub enum IdcrError {
    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode an OCR payload.
    #[error("failed to decode OCR payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The OCR service reported a failure.
    #[error("OCR service failure: {0}")]
    Ocr(String),
}

/// Result type for the idcr library.
pub type Result<T> = std::result::Result<T, IdcrError>;
