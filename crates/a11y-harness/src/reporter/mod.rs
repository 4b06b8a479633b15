//! Probe result reporting
//!
//! Formats a [`ProbeReport`] for humans (console) or tooling (JSON). The
//! JSON rendering is written into the evidence directory next to the
//! screenshots so one run leaves one self-contained bundle.

mod console;
mod json;

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::probes::ProbeReport;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for probe reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Human-readable console output
    #[default]
    Console,
}

/// Reporter for probe results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report results to stdout
    pub fn report(&self, report: &ProbeReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write results to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &ProbeReport, path: P) -> Result<()> {
        let output = self.format_report(report)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_report(&self, report: &ProbeReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
            OutputFormat::Console => ConsoleReporter::format(report),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
