//! Screenshot evidence capture
//!
//! Screenshots land under a single evidence directory with fixed file
//! names, so a reviewer always knows where to look after a run.

use std::path::{Path, PathBuf};

use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use tracing::info;

use crate::error::{ProbeError, ProbeResult};

/// Screenshot of the application root, from the reachability probe.
pub const LANDING_SCREENSHOT: &str = "landing_page.png";
/// Screenshot of the scheduler route, from the reachability probe.
pub const SCHEDULER_SCREENSHOT: &str = "scheduler_page.png";
/// Screenshot of the calendar with the month dropdown expanded.
pub const DROPDOWN_SCREENSHOT: &str = "calendar_dropdown.png";
/// Screenshot taken when a check fails, before the error propagates.
pub const FAILURE_SCREENSHOT: &str = "failure.png";

/// Writes PNG screenshots into the evidence directory.
pub struct EvidenceCapture {
    dir: PathBuf,
}

impl EvidenceCapture {
    /// Create a capture rooted at the given directory. The directory is
    /// created on first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The evidence directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Capture the current viewport as a PNG under the given file name.
    pub async fn screenshot(&self, page: &Page, name: &str) -> ProbeResult<PathBuf> {
        self.capture(page, name, false).await
    }

    /// Capture the full page as a PNG under the given file name.
    pub async fn full_page_screenshot(&self, page: &Page, name: &str) -> ProbeResult<PathBuf> {
        self.capture(page, name, true).await
    }

    async fn capture(&self, page: &Page, name: &str, full_page: bool) -> ProbeResult<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|source| ProbeError::EvidenceDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(name);
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(full_page)
            .build();
        page.save_screenshot(params, &path)
            .await
            .map_err(|source| ProbeError::Screenshot {
                path: path.clone(),
                source,
            })?;

        info!("Saved screenshot to {}", path.display());
        Ok(path)
    }
}
