//! seo_audit library: single-page SEO auditing
//!
//! This library fetches one web page, runs a fixed set of SEO checks over it
//! (technical SEO, content quality, performance, mobile, security, social
//! tags, linking), and folds the findings into a scored report with insights
//! and a phased action plan.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{run_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(&config).await?;
//! println!("{} scored {}/100", report.url, report.overall_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod audit;
pub mod checks;
pub mod config;
mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
mod metrics;
pub mod parse;
pub mod report;
mod snapshot;
pub mod suggest;
mod utils;

// Re-export public API
pub use audit::{audit_snapshot, AuditState, Auditor};
pub use config::{AuditOptions, Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{AuditError, FetchErrorKind, InitializationError, SuggestionError};
pub use fetch::{fetch_page, FetchResult, ResponseHeaders};
pub use metrics::PageMetrics;
pub use report::{Finding, Report, Severity};
pub use run::run_audit;
pub use snapshot::{PageDocument, PageSnapshot};
pub use utils::validate_and_normalize_url;

// Internal run module (wires configuration to the auditor)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::audit::Auditor;
    use crate::config::Config;
    use crate::initialization::init_client;
    use crate::report::Report;

    /// Runs one audit with the provided configuration.
    ///
    /// A failed audit (unreachable page, invalid URL) is not an error here:
    /// it comes back as a report whose status is failed. Only setup problems
    /// are returned as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub async fn run_audit(config: &Config) -> Result<Report> {
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let options = config.audit_options();
        info!(
            "Auditing {} (suggestions: {}, wordpress: {}, timeout: {}s)",
            config.url,
            options.enable_suggestions,
            options.enable_wordpress_detection,
            config.timeout_seconds
        );

        let auditor = Auditor::new(client, options);
        Ok(auditor.audit(&config.url).await)
    }
}
