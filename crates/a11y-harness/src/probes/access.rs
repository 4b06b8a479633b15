//! Exploratory reachability probe
//!
//! Answers one question for a human reviewer: can the date-picker-bearing
//! route be reached without authentication? The probe loads the
//! application root and then the scheduler route directly, capturing a
//! screenshot and the page title at each stop. It asserts nothing and
//! reports no verdict; the screenshots and the requested-vs-final URLs are
//! the output, inspected manually to decide next steps.

use std::time::Instant;

use chromiumoxide::Page;
use chrono::Utc;
use tracing::info;

use crate::config::Config;
use crate::dom;
use crate::error::ProbeResult;
use crate::evidence::{EvidenceCapture, LANDING_SCREENSHOT, SCHEDULER_SCREENSHOT};
use crate::probes::{PageVisit, ProbeReport};

/// The reachability probe.
pub struct AccessProbe {
    config: Config,
}

impl AccessProbe {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Visit the application root and the scheduler route, capturing
    /// evidence at each stop.
    ///
    /// # Errors
    ///
    /// Only automation-layer failures (navigation, screenshot capture)
    /// propagate; there are no assertions to fail.
    pub async fn run(&self, page: &Page) -> ProbeResult<ProbeReport> {
        let evidence = EvidenceCapture::new(self.config.evidence.dir.clone());
        let started_at = Utc::now().to_rfc3339();
        let start = Instant::now();
        let mut visits = Vec::new();
        let mut shots = Vec::new();

        let landing = self
            .visit(page, self.config.target.root_url(), LANDING_SCREENSHOT, &evidence, &mut shots)
            .await?;
        info!("Page title: {}", landing.title.as_deref().unwrap_or("<none>"));
        visits.push(landing);

        // The scheduler route may be behind auth; the final URL records
        // whether we were redirected.
        let scheduler = self
            .visit(
                page,
                self.config.target.scheduler_url(),
                SCHEDULER_SCREENSHOT,
                &evidence,
                &mut shots,
            )
            .await?;
        visits.push(scheduler);

        Ok(ProbeReport {
            probe: "check-access".to_string(),
            base_url: self.config.target.root_url(),
            started_at,
            duration_ms: start.elapsed().as_millis() as u64,
            checks: Vec::new(),
            visits,
            evidence: shots,
            passed: None,
        })
    }

    async fn visit(
        &self,
        page: &Page,
        url: String,
        screenshot_name: &str,
        evidence: &EvidenceCapture,
        shots: &mut Vec<String>,
    ) -> ProbeResult<PageVisit> {
        info!("Navigating to {}", url);
        dom::navigate(page, &url).await?;
        dom::wait_for_idle(page, self.config.timeouts.idle_settle()).await?;

        let title = page.get_title().await?;
        let final_url = page.url().await?;
        let path = evidence.full_page_screenshot(page, screenshot_name).await?;
        shots.push(path.display().to_string());

        Ok(PageVisit {
            requested_url: url,
            final_url,
            title,
        })
    }
}
