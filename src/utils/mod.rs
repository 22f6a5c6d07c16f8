//! Shared helpers.
//!
//! This module provides:
//! - CSS selector parsing for the static selectors
//! - Character-aware text helpers
//! - Validation and normalization of the URL to audit

mod selector;
pub mod text;
mod url;

pub use selector::parse_selector_unsafe;
pub use self::url::validate_and_normalize_url;
