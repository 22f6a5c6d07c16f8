//! HTTP redirect handling.
//!
//! Redirects are followed manually (the client has `Policy::none()`) so the
//! fetcher can count and log each hop.

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};

/// Returns true for the statuses the fetcher follows (301, 302, 303, 307, 308).
pub(crate) fn is_followed_redirect(status: StatusCode) -> bool {
    matches!(status.as_u16(), 301 | 302 | 303 | 307 | 308)
}

/// Resolves the `Location` header of a redirect response against `current`.
///
/// Returns `None` when the header is missing, not valid UTF-8, or does not
/// form a URL.
pub(crate) fn redirect_target(current: &Url, headers: &HeaderMap) -> Option<Url> {
    let location = headers.get(reqwest::header::LOCATION)?.to_str().ok()?;
    let location = location.trim();
    if location.is_empty() {
        return None;
    }
    Url::parse(location)
        .or_else(|_| current.join(location))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, LOCATION};

    fn headers_with_location(location: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_static(location));
        headers
    }

    #[test]
    fn test_followed_statuses() {
        for code in [301u16, 302, 303, 307, 308] {
            assert!(is_followed_redirect(StatusCode::from_u16(code).unwrap()));
        }
        for code in [200u16, 300, 304, 404, 500] {
            assert!(!is_followed_redirect(StatusCode::from_u16(code).unwrap()));
        }
    }

    #[test]
    fn test_absolute_location() {
        let current = Url::parse("http://example.com/old").unwrap();
        let target = redirect_target(&current, &headers_with_location("https://example.com/new"));
        assert_eq!(target.unwrap().as_str(), "https://example.com/new");
    }

    #[test]
    fn test_relative_location_resolves_against_current() {
        let current = Url::parse("http://example.com/a/b").unwrap();
        let target = redirect_target(&current, &headers_with_location("/landing?x=1"));
        assert_eq!(target.unwrap().as_str(), "http://example.com/landing?x=1");
    }

    #[test]
    fn test_missing_location() {
        let current = Url::parse("http://example.com/").unwrap();
        assert!(redirect_target(&current, &HeaderMap::new()).is_none());
    }
}
