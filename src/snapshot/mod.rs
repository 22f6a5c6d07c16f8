//! The fetched-and-parsed page.
//!
//! A `PageSnapshot` is built once per audit from the fetch result and is
//! read-only afterwards. Every check reads from it; none modify it.

mod document;

use std::time::Duration;

use url::Url;

use crate::error_handling::AuditError;
use crate::fetch::{FetchResult, ResponseHeaders};

pub use document::{element_text, PageDocument};

/// Immutable record of one fetched page.
#[derive(Debug)]
pub struct PageSnapshot {
    /// The URL the caller asked for (normalized)
    pub requested_url: String,
    /// Final URL after redirects; all URL-based checks use this
    pub url: Url,
    /// Host plus explicit port of `url`, used to classify links
    pub domain: String,
    /// HTTP status of the final response
    pub status_code: u16,
    /// Total fetch time including redirects and body read
    pub elapsed: Duration,
    /// Number of redirect hops followed
    pub redirect_count: usize,
    /// Response headers of the final response
    pub headers: ResponseHeaders,
    /// Length of the decoded body in bytes
    pub body_bytes: usize,
    /// Raw markup, for substring-based detection
    pub html: String,
    /// Parsed markup
    pub document: PageDocument,
}

impl PageSnapshot {
    /// Builds a snapshot from a completed fetch.
    ///
    /// Bodies that are not valid UTF-8 are decoded lossily.
    ///
    /// # Errors
    ///
    /// - `AuditError::Parse` if the body is empty (or only whitespace)
    /// - `AuditError::InvalidUrl` if the final URL does not parse
    pub fn new(requested_url: &str, fetch: FetchResult) -> Result<Self, AuditError> {
        let url = Url::parse(&fetch.final_url)
            .map_err(|e| AuditError::InvalidUrl(format!("{}: {e}", fetch.final_url)))?;

        let html = String::from_utf8_lossy(&fetch.body).into_owned();
        if html.trim().is_empty() {
            return Err(AuditError::Parse(format!(
                "empty response body from {} (HTTP {})",
                url, fetch.status_code
            )));
        }

        let document = PageDocument::parse(&html);
        let domain = netloc(&url);

        Ok(Self {
            requested_url: requested_url.to_string(),
            url,
            domain,
            status_code: fetch.status_code,
            elapsed: fetch.elapsed,
            redirect_count: fetch.redirect_count,
            headers: fetch.headers,
            body_bytes: fetch.body.len(),
            html,
            document,
        })
    }

    /// Returns true when the final URL is served over HTTPS.
    pub fn is_https(&self) -> bool {
        self.url.scheme() == "https"
    }
}

/// Host with the port appended when one is given explicitly.
///
/// `https://example.com:8443/a` yields `example.com:8443`; default ports are
/// dropped by the URL parser and so never appear.
pub fn netloc(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
