//! HTTP header name constants.
//!
//! Security headers the HTTPS check expects to see, plus the few response
//! headers other checks read.

// Security header names
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// X-XSS-Protection header
pub const HEADER_X_XSS_PROTECTION: &str = "X-XSS-Protection";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";

/// Security headers every page should send, with the protection each gives.
/// Missing ones are listed in a single low-priority finding.
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    (HEADER_STRICT_TRANSPORT_SECURITY, "HSTS"),
    (HEADER_X_CONTENT_TYPE_OPTIONS, "MIME sniffing protection"),
    (HEADER_X_FRAME_OPTIONS, "Clickjacking protection"),
    (HEADER_X_XSS_PROTECTION, "XSS protection"),
    (HEADER_CONTENT_SECURITY_POLICY, "CSP"),
];

// Other response headers
/// Content-Encoding header (compression)
pub const HEADER_CONTENT_ENCODING: &str = "Content-Encoding";
