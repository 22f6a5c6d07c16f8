//! HTTP client initialization.
//!
//! The audit uses a single `reqwest::Client` with redirects disabled: the
//! fetcher follows the chain itself so it can count hops.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the page fetch.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Timeout from the configuration
/// - Redirects disabled (followed manually by `fetch_page`)
/// - Certificate verification disabled, so sites with broken or self-signed
///   certificates can still be audited
/// - Transparent decompression disabled, so `Content-Encoding` stays visible
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    build_client(
        Duration::from_secs(config.timeout_seconds),
        &config.user_agent,
    )
}

/// Builds the audit client with an explicit timeout.
///
/// `init_client` is the usual entry point; this variant exists for callers
/// (and tests) that need sub-second timeouts.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn build_client(
    timeout: Duration,
    user_agent: &str,
) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .user_agent(user_agent)
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(client)
}
