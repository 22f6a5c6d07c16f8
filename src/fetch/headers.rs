//! Response header storage with case-insensitive lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response headers keyed by lowercased name.
///
/// Repeated headers are joined with `", "`, the way HTTP allows list-valued
/// headers to be combined. Lookups ignore case, so `get("Content-Encoding")`
/// and `get("content-encoding")` are the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeaders(BTreeMap<String, String>);

impl ResponseHeaders {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, appending to any existing value of the same name.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.0
            .entry(name.to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Returns the value of `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Returns true when `name` is present, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no headers are stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(lowercased name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&reqwest::header::HeaderMap> for ResponseHeaders {
    fn from(map: &reqwest::header::HeaderMap) -> Self {
        let mut headers = ResponseHeaders::new();
        for (name, value) in map {
            // Non-ASCII header values are kept lossily rather than dropped
            let value = String::from_utf8_lossy(value.as_bytes());
            headers.insert(name.as_str(), &value);
        }
        headers
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for ResponseHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = ResponseHeaders::new();
        for (name, value) in iter {
            headers.insert(name.as_ref(), value.as_ref());
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let headers: ResponseHeaders = [("Content-Encoding", "gzip")].into_iter().collect();
        assert_eq!(headers.get("content-encoding"), Some("gzip"));
        assert_eq!(headers.get("CONTENT-ENCODING"), Some("gzip"));
        assert!(headers.contains("Content-encoding"));
        assert!(!headers.contains("Content-Type"));
    }

    #[test]
    fn test_repeated_headers_are_joined() {
        let mut headers = ResponseHeaders::new();
        headers.insert("Vary", "Accept");
        headers.insert("vary", "Cookie");
        assert_eq!(headers.get("Vary"), Some("Accept, Cookie"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_from_header_map() {
        let mut map = reqwest::header::HeaderMap::new();
        map.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("text/html"),
        );
        map.insert(
            reqwest::header::STRICT_TRANSPORT_SECURITY,
            reqwest::header::HeaderValue::from_static("max-age=31536000"),
        );
        let headers = ResponseHeaders::from(&map);
        assert_eq!(headers.get("Content-Type"), Some("text/html"));
        assert_eq!(
            headers.get("Strict-Transport-Security"),
            Some("max-age=31536000")
        );
    }
}
