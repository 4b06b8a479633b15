//! Accessibility probe for the calendar test page
//!
//! Verifies the ARIA contract of the date-picker component on the
//! unauthenticated `/test-calendar` route: labelled navigation buttons,
//! popup indicators on the month/year selectors, day-button labels derived
//! from the seeded reference date, and the expanded-state transition when
//! the month dropdown opens.
//!
//! The probe is fail-fast: the first unmet condition aborts the run. A
//! failure screenshot is captured best effort before the error propagates,
//! so a reviewer can see what the page looked like at the moment the check
//! failed.

use std::time::Instant;

use chromiumoxide::Page;
use chrono::{Datelike, NaiveDate, Utc};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::dom;
use crate::error::{ProbeError, ProbeResult};
use crate::evidence::{EvidenceCapture, DROPDOWN_SCREENSHOT, FAILURE_SCREENSHOT};
use crate::probes::{CheckResult, ProbeReport};

/// Landmark text identifying the calendar test page.
pub const LANDMARK_TEXT: &str = "Calendar Accessibility Test";

/// Accessible label of the previous-month navigation button.
pub const PREV_MONTH_LABEL: &str = "Previous month";
/// Accessible label of the next-month navigation button.
pub const NEXT_MONTH_LABEL: &str = "Next month";
/// Accessible label of the month selector.
pub const MONTH_SELECT_LABEL: &str = "Select month";
/// Accessible label of the year selector.
pub const YEAR_SELECT_LABEL: &str = "Select year";

/// Accessible label of an unselected day button, e.g. `2 January 2024`.
pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%B %Y"))
}

/// Accessible label of the selected day button, e.g.
/// `Selected: 1 January 2024`.
pub fn selected_day_label(date: NaiveDate) -> String {
    format!("Selected: {}", day_label(date))
}

/// The assertion probe for the date-picker's accessibility attributes.
pub struct CalendarProbe {
    config: Config,
}

impl CalendarProbe {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run every check against the calendar test route.
    ///
    /// # Errors
    ///
    /// Returns the first failed check or automation error. By that point a
    /// `failure.png` has been written to the evidence directory if the page
    /// was still capturable.
    pub async fn run(&self, page: &Page) -> ProbeResult<ProbeReport> {
        let evidence = EvidenceCapture::new(self.config.evidence.dir.clone());
        let started_at = Utc::now().to_rfc3339();
        let start = Instant::now();
        let mut checks = Vec::new();
        let mut shots = Vec::new();

        match self.verify(page, &evidence, &mut checks, &mut shots).await {
            Ok(()) => Ok(ProbeReport {
                probe: "verify-calendar".to_string(),
                base_url: self.config.target.root_url(),
                started_at,
                duration_ms: start.elapsed().as_millis() as u64,
                checks,
                visits: Vec::new(),
                evidence: shots,
                passed: Some(true),
            }),
            Err(e) => {
                error!("Verification failed: {}", e);
                if let Err(shot_err) = evidence.screenshot(page, FAILURE_SCREENSHOT).await {
                    warn!("Could not capture failure screenshot: {}", shot_err);
                }
                Err(e)
            }
        }
    }

    async fn verify(
        &self,
        page: &Page,
        evidence: &EvidenceCapture,
        checks: &mut Vec<CheckResult>,
        shots: &mut Vec<String>,
    ) -> ProbeResult<()> {
        let timeouts = &self.config.timeouts;
        let reference = &self.config.reference;
        let selected = reference.date().ok_or(ProbeError::InvalidReferenceDate {
            year: reference.year,
            month: reference.month,
            day: reference.day,
        })?;
        let next_day = selected.succ_opt().ok_or(ProbeError::InvalidReferenceDate {
            year: reference.year,
            month: reference.month,
            day: reference.day,
        })?;

        let url = self.config.target.calendar_url();
        info!("Navigating to {}", url);
        dom::navigate(page, &url).await?;
        dom::wait_for_idle(page, timeouts.idle_settle()).await?;

        // Landmark confirming the test page rendered at all.
        dom::wait_for_text(page, LANDMARK_TEXT, timeouts).await?;

        // Navigation buttons
        let prev = dom::find_by_label(page, PREV_MONTH_LABEL, timeouts).await?;
        dom::wait_visible(&prev, PREV_MONTH_LABEL, timeouts).await?;
        let next = dom::find_by_label(page, NEXT_MONTH_LABEL, timeouts).await?;
        dom::wait_visible(&next, NEXT_MONTH_LABEL, timeouts).await?;
        record(
            checks,
            "month-navigation-labels",
            "Previous/Next month buttons have aria-labels",
        );

        // Month/year dropdowns
        let month = dom::find_by_label(page, MONTH_SELECT_LABEL, timeouts).await?;
        dom::wait_visible(&month, MONTH_SELECT_LABEL, timeouts).await?;
        let year = dom::find_by_label(page, YEAR_SELECT_LABEL, timeouts).await?;
        dom::wait_visible(&year, YEAR_SELECT_LABEL, timeouts).await?;
        record(checks, "dropdown-labels", "Month/Year dropdowns have aria-labels");

        dom::expect_attribute_eq(&month, MONTH_SELECT_LABEL, "aria-haspopup", "true", timeouts)
            .await?;
        dom::expect_attribute_eq(&year, YEAR_SELECT_LABEL, "aria-haspopup", "true", timeouts)
            .await?;
        record(checks, "dropdown-haspopup", "Month/Year dropdowns have aria-haspopup");

        // Day buttons
        let selected_label = selected_day_label(selected);
        let selected_btn = dom::find_button_by_label(page, &selected_label, timeouts).await?;
        dom::wait_visible(&selected_btn, &selected_label, timeouts).await?;
        record(
            checks,
            "selected-day-label",
            format!("Selected day has aria-label {selected_label:?}"),
        );

        let unselected_label = day_label(next_day);
        let unselected_btn = dom::find_button_by_label(page, &unselected_label, timeouts).await?;
        dom::wait_visible(&unselected_btn, &unselected_label, timeouts).await?;
        record(
            checks,
            "unselected-day-label",
            format!("Unselected day has aria-label {unselected_label:?}"),
        );

        // An unselected day must not carry the selected-state prefix.
        let raw_label = dom::attribute(&unselected_btn, "aria-label")
            .await?
            .unwrap_or_default();
        if raw_label.contains("Selected") {
            return Err(ProbeError::ForbiddenLabelText {
                label: raw_label,
                needle: "Selected".to_string(),
            });
        }

        // Expand the month dropdown
        month.click().await?;
        dom::expect_attribute_eq(&month, MONTH_SELECT_LABEL, "aria-expanded", "true", timeouts)
            .await?;
        record(checks, "dropdown-expands", "Month dropdown updates aria-expanded");

        let path = evidence.screenshot(page, DROPDOWN_SCREENSHOT).await?;
        shots.push(path.display().to_string());

        Ok(())
    }
}

fn record(checks: &mut Vec<CheckResult>, name: &str, detail: impl Into<String>) {
    let detail = detail.into();
    info!("✓ {}", detail);
    checks.push(CheckResult {
        name: name.to_string(),
        detail,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_label_formats_reference_date() {
        assert_eq!(day_label(date(2024, 1, 2)), "2 January 2024");
        assert_eq!(day_label(date(2024, 12, 31)), "31 December 2024");
    }

    #[test]
    fn test_day_label_has_no_zero_padding() {
        assert_eq!(day_label(date(2024, 1, 1)), "1 January 2024");
    }

    #[test]
    fn test_selected_day_label_prefix() {
        assert_eq!(
            selected_day_label(date(2024, 1, 1)),
            "Selected: 1 January 2024"
        );
    }

    #[test]
    fn test_unselected_label_carries_no_selected_marker() {
        assert!(!day_label(date(2024, 1, 2)).contains("Selected"));
    }

    #[test]
    fn test_day_after_reference_rolls_over_month_end() {
        let last = date(2024, 1, 31);
        assert_eq!(day_label(last.succ_opt().unwrap()), "1 February 2024");
    }
}
