//! Page fetching.
//!
//! A single best-effort GET of the audited page: browser-like headers,
//! redirects followed and counted by hand, compressed bodies inflated while
//! the `Content-Encoding` header is kept for the performance check.

mod decode;
mod headers;
mod redirects;
mod request;

use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::Url;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::AuditError;

pub use headers::ResponseHeaders;

use decode::decode_body;
use redirects::{is_followed_redirect, redirect_target};
use request::RequestHeaders;

/// Everything the audit needs from the HTTP exchange.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// URL of the response that was finally read (after redirects)
    pub final_url: String,
    /// HTTP status of the final response
    pub status_code: u16,
    /// Wall time from the first request to the end of the body read
    pub elapsed: Duration,
    /// Headers of the final response
    pub headers: ResponseHeaders,
    /// Number of redirect hops followed
    pub redirect_count: usize,
    /// Decoded response body
    pub body: Vec<u8>,
}

/// Fetches `url`, following up to `max_hops` redirects.
///
/// Non-2xx responses are returned like any other: an error page is still a
/// page to audit. When the hop limit is reached the last redirect response
/// itself is returned.
///
/// # Errors
///
/// - `AuditError::InvalidUrl` if `url` does not parse
/// - `AuditError::Fetch` for DNS, connect, TLS, timeout or body-read failures
/// - `AuditError::Parse` if a compressed body cannot be decoded
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    max_hops: usize,
) -> Result<FetchResult, AuditError> {
    let mut current =
        Url::parse(url).map_err(|e| AuditError::InvalidUrl(format!("{url}: {e}")))?;
    let mut redirect_count = 0;
    let start = Instant::now();

    debug!("Request headers: {:?}", RequestHeaders::as_vec());

    loop {
        let response = RequestHeaders::apply_to_request_builder(client.get(current.clone()))
            .send()
            .await
            .map_err(|e| AuditError::fetch(current.as_str(), e))?;

        let status = response.status();
        if is_followed_redirect(status) {
            if redirect_count >= max_hops {
                warn!(
                    "Stopped following redirects for {} after {} hops",
                    url, redirect_count
                );
            } else if let Some(next) = redirect_target(&current, response.headers()) {
                debug!("Redirect {} -> {} ({})", current, next, status.as_u16());
                redirect_count += 1;
                current = next;
                continue;
            } else {
                warn!(
                    "Redirect status {} for {} but no usable Location header",
                    status.as_u16(),
                    current
                );
            }
        }

        let headers = ResponseHeaders::from(response.headers());
        let raw = read_capped_body(response, current.as_str()).await?;
        let body = decode_body(
            raw,
            headers.get(reqwest::header::CONTENT_ENCODING.as_str()),
            MAX_RESPONSE_BODY_SIZE,
        )?;
        let elapsed = start.elapsed();

        debug!(
            "Fetched {} (status {}, {} bytes, {} redirects, {:.3}s)",
            current,
            status.as_u16(),
            body.len(),
            redirect_count,
            elapsed.as_secs_f64()
        );

        return Ok(FetchResult {
            final_url: current.to_string(),
            status_code: status.as_u16(),
            elapsed,
            headers,
            redirect_count,
            body,
        });
    }
}

/// Reads the response body chunk by chunk, truncating past the size cap.
async fn read_capped_body(
    mut response: reqwest::Response,
    url: &str,
) -> Result<Vec<u8>, AuditError> {
    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| AuditError::fetch(url, e))?
    {
        let remaining = MAX_RESPONSE_BODY_SIZE.saturating_sub(body.len());
        if chunk.len() > remaining {
            body.extend_from_slice(&chunk[..remaining]);
            warn!(
                "Response body for {} exceeds {} bytes, truncating",
                url, MAX_RESPONSE_BODY_SIZE
            );
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
