//! Application configuration and constants.
//!
//! This module provides:
//! - Audit thresholds and network limits
//! - HTTP header name constants
//! - CLI option types and the engine's feature flags

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{AuditOptions, Config, LogFormat, LogLevel, OutputFormat};
