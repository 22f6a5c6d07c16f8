//! HTTP request building.
//!
//! This module provides the browser-like request headers sent with every
//! hop of the page fetch.

/// Realistic browser request headers.
///
/// These headers mimic a modern Chrome browser navigation. Sites that sniff
/// headers often serve a different (or blocked) page to obvious bots, and the
/// audit should see what a visitor sees.
///
/// `Accept-Encoding` only advertises encodings `fetch::decode` can undo, so
/// the body is always readable and `Content-Encoding` survives for the
/// compression check.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Returns headers as a vector of (name, value) tuples for debug logging.
    pub(crate) fn as_vec() -> Vec<(&'static str, &'static str)> {
        vec![
            (
                "accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
            ("accept-language", "en-US,en;q=0.9"),
            ("accept-encoding", "gzip, deflate"),
            ("dnt", "1"),
            ("upgrade-insecure-requests", "1"),
        ]
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::ACCEPT_ENCODING, "gzip, deflate")
            .header(reqwest::header::DNT, "1")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_vec_matches_applied_headers() {
        let client = reqwest::Client::new();
        let request = RequestHeaders::apply_to_request_builder(client.get("http://example.com/"))
            .build()
            .expect("request should build");
        for (name, value) in RequestHeaders::as_vec() {
            assert_eq!(
                request
                    .headers()
                    .get(name)
                    .and_then(|v| v.to_str().ok()),
                Some(value),
                "header {} should be applied",
                name
            );
        }
    }

    #[test]
    fn test_only_decodable_encodings_are_advertised() {
        let encoding = RequestHeaders::as_vec()
            .into_iter()
            .find(|(name, _)| *name == "accept-encoding")
            .map(|(_, value)| value);
        assert_eq!(encoding, Some("gzip, deflate"));
    }
}
