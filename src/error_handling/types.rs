//! Error type definitions.
//!
//! This module defines the error types used throughout the application:
//! initialization failures, fatal audit failures, and the recoverable
//! failures of the optional suggestion service.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Fatal failures of an audit run.
///
/// Any of these ends the run before a single check executes; the caller gets
/// a report carrying the failure and no findings.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The input could not be turned into an http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The network call failed (DNS, connect, timeout, TLS, body read).
    #[error("Failed to fetch {url}: {kind}: {source}")]
    Fetch {
        /// URL of the request that failed
        url: String,
        /// Coarse classification of the failure
        kind: FetchErrorKind,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The response could not be turned into a document.
    #[error("Failed to parse page: {0}")]
    Parse(String),
}

impl AuditError {
    /// Wraps a client error for `url`, classifying it on the way.
    pub fn fetch(url: &str, source: ReqwestError) -> Self {
        AuditError::Fetch {
            url: url.to_string(),
            kind: categorize_reqwest_error(&source),
            source,
        }
    }

    /// Returns true when the run failed because the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            AuditError::Fetch {
                kind: FetchErrorKind::Timeout,
                ..
            }
        )
    }
}

/// Coarse classification of fetch failures, for messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    /// The request did not complete within the configured timeout
    Timeout,
    /// DNS resolution, TCP connect or TLS handshake failed
    Connect,
    /// The redirect chain was invalid
    Redirect,
    /// The response body could not be read or decoded
    Body,
    /// The request could not be built (bad URL or header)
    Builder,
    /// Anything else
    Other,
}

impl FetchErrorKind {
    /// Returns a human-readable string representation of the failure kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Timeout => "request timed out",
            FetchErrorKind::Connect => "connection failed",
            FetchErrorKind::Redirect => "redirect error",
            FetchErrorKind::Body => "could not read response body",
            FetchErrorKind::Builder => "invalid request",
            FetchErrorKind::Other => "request error",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// Timeouts are checked first because a timed-out connect reports both
/// `is_timeout()` and `is_connect()`.
pub(crate) fn categorize_reqwest_error(error: &ReqwestError) -> FetchErrorKind {
    if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_body() || error.is_decode() {
        FetchErrorKind::Body
    } else if error.is_builder() {
        FetchErrorKind::Builder
    } else {
        FetchErrorKind::Other
    }
}

/// Failures of the optional suggestion service.
///
/// Never fatal: the orchestrator logs them and falls back to
/// keyword-derived suggestions.
#[derive(Error, Debug)]
pub enum SuggestionError {
    /// No API key was configured.
    #[error("Suggestion service not configured: {0} is not set")]
    MissingApiKey(&'static str),

    /// The HTTP call itself failed.
    #[error("Suggestion request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The service answered with a non-success status.
    #[error("Suggestion service returned HTTP {0}")]
    Status(u16),

    /// The call did not finish in time.
    #[error("Suggestion request timed out")]
    Timeout,

    /// The payload did not contain usable suggestions.
    #[error("Unparseable suggestion payload: {0}")]
    Payload(String),
}
