//! Writing rendered reports to a file or stdout.

use std::fs::File;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::report::Report;

use super::{render_text, summary_to_csv, to_json, SummaryRow};

/// Wrapper around a Write that ignores broken pipe errors (EPIPE).
/// This allows graceful handling when stdout is piped to a command that exits early.
struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Renders `report` in `format` and writes it to `output`, or stdout when
/// `output` is `None`.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn write_report(report: &Report, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(IgnoreBrokenPipe { inner: io::stdout() }),
    };

    match format {
        OutputFormat::Text => writer
            .write_all(render_text(report).as_bytes())
            .context("Failed to write text report")?,
        OutputFormat::Json => {
            let json = to_json(report)?;
            writeln!(writer, "{json}").context("Failed to write JSON report")?;
        }
        OutputFormat::Csv => summary_to_csv(&[SummaryRow::from_report(report)], &mut writer)?,
    }

    writer.flush().context("Failed to flush report output")?;
    if let Some(path) = output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}
