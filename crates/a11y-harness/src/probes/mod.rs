//! Verification probes and their run records
//!
//! A probe drives the session's page through a fixed sequence of steps and
//! produces a [`ProbeReport`]: the machine-readable companion to the
//! screenshots, written next to them for later inspection.

pub mod access;
pub mod calendar;

use serde::{Deserialize, Serialize};

/// One verified accessibility condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Stable identifier for the check
    pub name: String,
    /// Human-readable statement of what was verified
    pub detail: String,
}

/// Record of a page navigation performed by a probe.
///
/// `final_url` differing from `requested_url` is how an auth redirect
/// shows up in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageVisit {
    /// URL the probe asked for
    pub requested_url: String,
    /// URL the browser ended up at after navigation settled
    pub final_url: Option<String>,
    /// Document title at that point
    pub title: Option<String>,
}

/// Complete record of a probe execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Name of the probe that produced this report
    pub probe: String,
    /// Base URL of the application under test
    pub base_url: String,
    /// RFC 3339 timestamp of when the probe started
    pub started_at: String,
    /// Wall-clock duration of the run
    pub duration_ms: u64,
    /// Conditions verified, in verification order
    pub checks: Vec<CheckResult>,
    /// Pages visited, in order
    pub visits: Vec<PageVisit>,
    /// Screenshot files written
    pub evidence: Vec<String>,
    /// `Some(true)` when every check passed; `None` for exploratory probes
    /// that make no assertions
    pub passed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization() {
        let report = ProbeReport {
            probe: "verify-calendar".to_string(),
            base_url: "http://localhost:3000".to_string(),
            started_at: "2024-01-01T00:00:00+00:00".to_string(),
            duration_ms: 1234,
            checks: vec![CheckResult {
                name: "landmark".to_string(),
                detail: "test page landmark is visible".to_string(),
            }],
            visits: Vec::new(),
            evidence: vec!["verification/calendar_dropdown.png".to_string()],
            passed: Some(true),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("verify-calendar"));
        assert!(json.contains("\"passed\":true"));

        let parsed: ProbeReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.checks.len(), 1);
        assert_eq!(parsed.passed, Some(true));
    }

    #[test]
    fn test_exploratory_report_has_no_verdict() {
        let report = ProbeReport {
            probe: "check-access".to_string(),
            base_url: "http://localhost:3000".to_string(),
            started_at: "2024-01-01T00:00:00+00:00".to_string(),
            duration_ms: 1234,
            checks: Vec::new(),
            visits: vec![PageVisit {
                requested_url: "http://localhost:3000/scheduler".to_string(),
                final_url: Some("http://localhost:3000/login".to_string()),
                title: Some("Sign in".to_string()),
            }],
            evidence: Vec::new(),
            passed: None,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"passed\":null"));
    }
}
