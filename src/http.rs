//! HTTP client wrapper for downloading daily reports from cbr.ru.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::Result;

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("cbr-rates/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with appropriate timeout and
/// user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download a report body from a URL.
///
/// Performs exactly one request. Non-success HTTP statuses are reported as
/// fetch errors rather than handed to the decoder.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
///
/// # Returns
/// Raw bytes of the response body. The Russian feed arrives in
/// windows-1251, so the body stays as bytes until encoding normalization.
pub fn download_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    tracing::debug!(url, "Requesting daily report");

    let response = client.get(url).send()?.error_for_status()?;
    let bytes = response.bytes()?;

    tracing::debug!(len = bytes.len(), "Received report body");
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let client = create_client();
        assert!(client.is_ok());
    }
}
