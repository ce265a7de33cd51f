//! Persistence error types.

use thiserror::Error;

/// Errors that can occur when pushing to the audit database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Airtable credentials or identifiers are missing from configuration.
    #[error("Airtable is not configured (api_key, base_id, and table_id are required)")]
    MissingConfig,
}
