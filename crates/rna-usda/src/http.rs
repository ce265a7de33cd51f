//! Shared HTTP response helpers for the FoodData Central client.

use crate::error::UsdaError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`UsdaError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable). api.data.gov enforces hourly key quotas this way.
/// - **Non-success status** → [`UsdaError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, UsdaError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(UsdaError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(UsdaError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
