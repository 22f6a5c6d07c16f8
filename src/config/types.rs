//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the finished report is written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full plain-text report, every finding grouped by severity
    Text,
    /// The complete report as pretty-printed JSON
    Json,
    /// One-row CSV summary (scores, counts, key metrics)
    Csv,
}

/// Feature flags for a single audit run.
///
/// All engine variants share one check pipeline; these flags switch the
/// optional extras on and off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOptions {
    /// Ask the suggestion service for title/description ideas (falls back to
    /// keyword-derived suggestions when the service is unavailable)
    pub enable_suggestions: bool,
    /// Run WordPress detection and the WordPress-specific checks
    pub enable_wordpress_detection: bool,
    /// Keep remediation details on findings; when off only severity,
    /// category and message are reported
    pub verbose_findings: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            enable_suggestions: false,
            enable_wordpress_detection: false,
            verbose_findings: true,
        }
    }
}

/// Application configuration.
///
/// Parsed from the command line by the binary, or built programmatically
/// with `Config::default()` when the crate is used as a library.
///
/// # Examples
///
/// ```no_run
/// use seo_audit::Config;
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     enable_wordpress: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "seo_audit", version, about = "Single-page SEO audit")]
pub struct Config {
    /// URL to audit (https:// is assumed when no scheme is given)
    #[arg(value_parser)]
    pub url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: text|json|csv
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<std::path::PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Request title/description suggestions (uses OPENAI_API_KEY when set)
    #[arg(long = "suggestions")]
    pub enable_suggestions: bool,

    /// Detect WordPress and run the WordPress-specific checks
    #[arg(long = "wordpress")]
    pub enable_wordpress: bool,

    /// Report findings without remediation details
    #[arg(long)]
    pub brief: bool,
}

impl Config {
    /// Projects the feature flags for the audit engine.
    pub fn audit_options(&self) -> AuditOptions {
        AuditOptions {
            enable_suggestions: self.enable_suggestions,
            enable_wordpress_detection: self.enable_wordpress,
            verbose_findings: !self.brief,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            format: OutputFormat::Text,
            output: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            enable_suggestions: false,
            enable_wordpress: false,
            brief: false,
        }
    }
}
