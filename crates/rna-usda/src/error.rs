//! USDA client error types.

use thiserror::Error;

/// Errors that can occur when querying FoodData Central.
#[derive(Debug, Error)]
pub enum UsdaError {
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

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// No API key configured; FoodData Central rejects anonymous requests.
    #[error("USDA API key is not configured")]
    MissingApiKey,

    /// Detail lookup found no food for the requested id.
    #[error("no USDA food found for FDC id {fdc_id}")]
    NotFound {
        /// The id that was looked up.
        fdc_id: u64,
    },
}
