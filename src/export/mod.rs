//! Report export.
//!
//! This module turns a finished `Report` into its output formats:
//! - Plain text (every finding, grouped by severity)
//! - JSON (the complete report)
//! - CSV (a one-row flat summary that round-trips losslessly)
//!
//! Rendering is pure; only `write_report` touches files or stdout.

mod csv;
mod output;
mod text;

pub use self::csv::{summary_from_csv, summary_to_csv, SummaryRow};
pub use output::write_report;
pub use text::render_text;

use anyhow::{Context, Result};

use crate::report::Report;

/// Serializes the complete report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
}
