//! CSV summary export.
//!
//! One flat row per audit: scores, bucket counts and the headline metrics.
//! Column names match what spreadsheet users of the audit already expect.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::report::{Report, Severity};

/// Flat summary of one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Audited URL
    #[serde(rename = "URL")]
    pub url: String,
    /// Report timestamp
    #[serde(rename = "Audit Date")]
    pub audit_date: String,
    /// Overall score, 0-100
    #[serde(rename = "Overall Score")]
    pub overall_score: u8,
    /// Critical findings
    #[serde(rename = "Critical Issues")]
    pub critical: usize,
    /// High-priority findings
    #[serde(rename = "High Priority")]
    pub high: usize,
    /// Medium-priority findings
    #[serde(rename = "Medium Priority")]
    pub medium: usize,
    /// Low-priority findings
    #[serde(rename = "Low Priority")]
    pub low: usize,
    /// Passed checks
    #[serde(rename = "Passed Checks")]
    pub passed: usize,
    /// Words of main content
    #[serde(rename = "Word Count")]
    pub word_count: usize,
    /// Number of images
    #[serde(rename = "Images")]
    pub images: usize,
    /// Number of internal links
    #[serde(rename = "Internal Links")]
    pub internal_links: usize,
    /// Load time in seconds, two decimals
    #[serde(rename = "Load Time (s)")]
    pub load_time_secs: f64,
    /// Page size in kilobytes, two decimals
    #[serde(rename = "Page Size (KB)")]
    pub page_size_kb: f64,
}

impl SummaryRow {
    /// Projects a report onto the summary columns.
    pub fn from_report(report: &Report) -> Self {
        let metrics = &report.metrics;
        Self {
            url: report.url.clone(),
            audit_date: report.timestamp.clone(),
            overall_score: report.overall_score,
            critical: report.findings.count(Severity::Critical),
            high: report.findings.count(Severity::High),
            medium: report.findings.count(Severity::Medium),
            low: report.findings.count(Severity::Low),
            passed: report.findings.count(Severity::Passed),
            word_count: metrics.word_count,
            images: metrics.image_count,
            internal_links: metrics.internal_links,
            load_time_secs: round2(metrics.load_time_secs),
            page_size_kb: round2(metrics.page_size_kb()),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Writes `rows` as CSV with a header line.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn summary_to_csv<W: Write>(rows: &[SummaryRow], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write CSV row for {}", row.url))?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Reads summary rows back from CSV produced by `summary_to_csv`.
///
/// # Errors
///
/// Returns an error if a row is malformed or a column is missing.
pub fn summary_from_csv<R: Read>(reader: R) -> Result<Vec<SummaryRow>> {
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize()
        .enumerate()
        .map(|(index, row)| row.with_context(|| format!("Invalid CSV summary row {}", index + 1)))
        .collect()
}
