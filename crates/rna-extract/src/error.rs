//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during label extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A collaborator returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// OCR completed with a failure exit code (bad image, quota, etc.).
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// The extraction model's response carried no parseable payload.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// A required API key is not configured.
    #[error("{service} API key is not configured")]
    MissingApiKey {
        /// Which collaborator the key belongs to.
        service: &'static str,
    },
}
