//! Console reporter for probe results
//!
//! Human-readable summary with one line per verified condition, the pages
//! visited, and the evidence files written.

use anyhow::Result;
use std::fmt::Write;

use crate::probes::ProbeReport;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a probe report for console output
    pub fn format(report: &ProbeReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                  ACCESSIBILITY PROBE REPORT                   ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        writeln!(output, "Probe:     {}", report.probe)?;
        writeln!(output, "Base URL:  {}", report.base_url)?;
        writeln!(output, "Started:   {}", report.started_at)?;
        writeln!(output, "Duration:  {}ms", report.duration_ms)?;

        if !report.checks.is_empty() {
            writeln!(output)?;
            writeln!(output, "Verified:")?;
            for check in &report.checks {
                writeln!(output, "  ✓ {}", check.detail)?;
            }
        }

        if !report.visits.is_empty() {
            writeln!(output)?;
            writeln!(output, "Visited:")?;
            for visit in &report.visits {
                let final_url = visit.final_url.as_deref().unwrap_or("<unknown>");
                if final_url == visit.requested_url {
                    writeln!(output, "  {}", visit.requested_url)?;
                } else {
                    writeln!(output, "  {} → {}", visit.requested_url, final_url)?;
                }
                if let Some(title) = &visit.title {
                    writeln!(output, "    title: {:?}", title)?;
                }
            }
        }

        if !report.evidence.is_empty() {
            writeln!(output)?;
            writeln!(output, "Evidence:")?;
            for path in &report.evidence {
                writeln!(output, "  {}", path)?;
            }
        }

        writeln!(output)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        match report.passed {
            Some(true) => writeln!(output, "Overall Status: ✓ PASSED")?,
            Some(false) => writeln!(output, "Overall Status: ✗ FAILED")?,
            None => writeln!(output, "Overall Status: exploratory (no verdict)")?,
        }
        writeln!(output)?;

        Ok(output)
    }
}
