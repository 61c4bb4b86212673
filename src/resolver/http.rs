//! Shared HTTP plumbing for the catalog and video clients.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::domain::ResolveError;
use crate::config::HttpConfig;

/// Build a reqwest client from the configured timeout and user agent.
///
/// Accepts gzip-compressed responses.
pub fn build_client(config: &HttpConfig) -> Result<reqwest::Client, ResolveError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| ResolveError::Unexpected(format!("Failed to build HTTP client: {}", e)))
}

/// Describe a non-success status the way the error messages show it.
pub fn describe_status(status: reqwest::StatusCode) -> String {
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

/// Parse a successful response body as JSON.
pub async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    service: &str,
) -> Result<T, ResolveError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ResolveError::Unexpected(format!("Failed to parse {} response: {}", service, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_from_defaults() {
        assert!(build_client(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_describe_status() {
        assert_eq!(
            describe_status(reqwest::StatusCode::SERVICE_UNAVAILABLE),
            "HTTP 503: Service Unavailable"
        );
    }
}
