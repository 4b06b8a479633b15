//! Configuration for the verification probes
//!
//! Every field has a default matching the environment the probes were
//! written against (an application on `http://localhost:3000` with an
//! unauthenticated `/test-calendar` route and a date picker seeded to
//! January 1, 2024), so both binaries run with no configuration file at
//! all. A TOML file can override any subset of the fields.

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Application under test
    #[serde(default)]
    pub target: TargetConfig,
    /// Where screenshots and reports are written
    #[serde(default)]
    pub evidence: EvidenceConfig,
    /// Wait and poll timing
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    /// Date the seeded date picker has selected
    #[serde(default)]
    pub reference: ReferenceDate,
    /// Browser launch settings
    #[serde(default)]
    pub browser: BrowserSettings,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Location of the application under test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Base URL the application is reachable at
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Unauthenticated route rendering the date picker in isolation
    #[serde(default = "default_calendar_route")]
    pub calendar_route: String,
    /// Candidate route bearing the date picker behind the app shell
    #[serde(default = "default_scheduler_route")]
    pub scheduler_route: String,
}

impl TargetConfig {
    /// URL of the application root
    pub fn root_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    /// Absolute URL of the calendar test route
    pub fn calendar_url(&self) -> String {
        self.join(&self.calendar_route)
    }

    /// Absolute URL of the scheduler route
    pub fn scheduler_url(&self) -> String {
        self.join(&self.scheduler_route)
    }

    fn join(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            calendar_route: default_calendar_route(),
            scheduler_route: default_scheduler_route(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_calendar_route() -> String {
    "/test-calendar".to_string()
}

fn default_scheduler_route() -> String {
    "/scheduler".to_string()
}

/// Evidence output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceConfig {
    /// Directory screenshots and reports are written to
    #[serde(default = "default_evidence_dir")]
    pub dir: PathBuf,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            dir: default_evidence_dir(),
        }
    }
}

fn default_evidence_dir() -> PathBuf {
    PathBuf::from("verification")
}

/// Wait and poll timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Maximum time to wait for an element or attribute state (default: 5000)
    #[serde(default = "default_element_ms")]
    pub element_ms: u64,
    /// Poll interval while waiting (default: 50)
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
    /// Settle time after navigation completes, standing in for a network-idle
    /// signal (default: 500)
    #[serde(default = "default_idle_settle_ms")]
    pub idle_settle_ms: u64,
}

impl TimeoutConfig {
    /// Maximum element wait as a [`Duration`]
    pub fn element(&self) -> Duration {
        Duration::from_millis(self.element_ms)
    }

    /// Poll interval as a [`Duration`]
    pub fn poll(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    /// Post-navigation settle time as a [`Duration`]
    pub fn idle_settle(&self) -> Duration {
        Duration::from_millis(self.idle_settle_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            element_ms: default_element_ms(),
            poll_ms: default_poll_ms(),
            idle_settle_ms: default_idle_settle_ms(),
        }
    }
}

fn default_element_ms() -> u64 {
    5000
}

fn default_poll_ms() -> u64 {
    50
}

fn default_idle_settle_ms() -> u64 {
    500
}

/// The date the seeded date picker has selected
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReferenceDate {
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default = "default_month")]
    pub month: u32,
    #[serde(default = "default_day")]
    pub day: u32,
}

impl ReferenceDate {
    /// The reference date as a [`NaiveDate`], `None` if the components do
    /// not form a real calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl Default for ReferenceDate {
    fn default() -> Self {
        Self {
            year: default_year(),
            month: default_month(),
            day: default_day(),
        }
    }
}

fn default_year() -> i32 {
    2024
}

fn default_month() -> u32 {
    1
}

fn default_day() -> u32 {
    1
}

/// Browser launch settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Explicit Chrome/Chromium executable; auto-detected when unset
    #[serde(default)]
    pub executable: Option<PathBuf>,
    /// Run with a visible browser window instead of headless
    #[serde(default)]
    pub headed: bool,
}
