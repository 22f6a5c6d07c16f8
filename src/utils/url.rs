//! URL validation and normalization.

use log::warn;

use crate::error_handling::AuditError;
use crate::utils::text::truncate_chars;

/// Maximum URL length (2048 characters), matching common browser and server limits.
const MAX_URL_LENGTH: usize = 2048;

/// Validates and normalizes the URL to audit.
///
/// Adds an `https://` prefix when no scheme is given, then checks that the
/// result parses and uses http or https. The returned string is the input
/// with the prefix added, not the parser's re-serialization.
///
/// # Errors
///
/// Returns `AuditError::InvalidUrl` if the URL is empty, longer than 2048
/// characters, does not parse, or uses another scheme.
pub fn validate_and_normalize_url(url: &str) -> Result<String, AuditError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AuditError::InvalidUrl("empty URL".to_string()));
    }

    let normalized = if has_scheme(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            truncate_chars(&normalized, 50)
        );
        return Err(AuditError::InvalidUrl(format!(
            "URL exceeds {MAX_URL_LENGTH} characters"
        )));
    }

    let parsed = url::Url::parse(&normalized)
        .map_err(|e| AuditError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(normalized),
        "http" | "https" => Err(AuditError::InvalidUrl(format!("{url}: missing host"))),
        other => Err(AuditError::InvalidUrl(format!(
            "{url}: unsupported scheme '{other}'"
        ))),
    }
}

/// True when `url` starts with `scheme://`.
///
/// A `://` later in the string (inside a query value, say) does not count.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;

    #[test]
    fn test_adds_https() {
        assert_eq!(
            validate_and_normalize_url("example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_preserves_existing_scheme() {
        assert_eq!(
            validate_and_normalize_url("http://example.com").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            validate_and_normalize_url("https://example.com/a?b=c").unwrap(),
            "https://example.com/a?b=c"
        );
    }

    #[test]
    fn test_embedded_scheme_in_query_still_gets_https() {
        assert_eq!(
            validate_and_normalize_url("example.com/login?next=https://x").unwrap(),
            "https://example.com/login?next=https://x"
        );
    }

    #[test]
    fn test_with_port_and_path() {
        assert_eq!(
            validate_and_normalize_url("example.com:8080/path#frag").unwrap(),
            "https://example.com:8080/path#frag"
        );
    }

    #[test]
    fn test_ipv6_host() {
        assert_eq!(
            validate_and_normalize_url("[2001:db8::1]/path").unwrap(),
            "https://[2001:db8::1]/path"
        );
    }

    #[test]
    fn test_rejects_unsupported_scheme() {
        assert!(validate_and_normalize_url("ftp://example.com").is_err());
        assert!(validate_and_normalize_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_rejects_garbage_and_empty() {
        assert!(validate_and_normalize_url("not a valid url!!!").is_err());
        assert!(validate_and_normalize_url("   ").is_err());
    }

    #[test]
    fn test_rejects_overlong_url() {
        let long = format!("example.com/{}", "a".repeat(2100));
        assert!(validate_and_normalize_url(&long).is_err());
    }
}
