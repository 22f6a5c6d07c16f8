//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, audit, suggestion service)
//! - Classification of client errors into coarse fetch failure kinds
//!
//! Only `AuditError` ends a run. Suggestion failures are recovered where they
//! happen, and check-level anomalies never surface as errors at all.

mod types;

// Re-export public API
pub use types::{AuditError, FetchErrorKind, InitializationError, SuggestionError};
