//! JSON reporter for probe results

use anyhow::Result;

use crate::probes::ProbeReport;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a probe report as JSON, compact or pretty-printed.
    pub fn format(report: &ProbeReport, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}
