//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Writing the report in the requested format
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_audit::export::write_report;
use seo_audit::initialization::init_logger_with;
use seo_audit::{run_audit, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting OPENAI_API_KEY in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let report = match run_audit(&config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("seo_audit error: {:#}", e);
            process::exit(1);
        }
    };

    write_report(&report, config.format, config.output.as_deref())
        .context("Failed to write report")?;

    if let Some(error) = report.error() {
        eprintln!("Audit of {} failed: {}", report.url, error);
        process::exit(1);
    }

    Ok(())
}
