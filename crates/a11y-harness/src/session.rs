//! Browser session lifecycle
//!
//! A [`Session`] owns the launched browser and the background task that
//! drains its CDP event stream. Probes borrow a single [`Page`] from it;
//! the binary that opened the session closes it on every exit path,
//! success or failure, before propagating the probe outcome.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::config::BrowserSettings;
use crate::error::{ProbeError, ProbeResult};

static SESSION_ID: AtomicU64 = AtomicU64::new(0);

/// A running headless browser plus its event-handler task.
pub struct Session {
    browser: Browser,
    handler: tokio::task::JoinHandle<()>,
}

impl Session {
    /// Launch a browser according to the given settings.
    ///
    /// Each session gets a unique user-data directory under the system temp
    /// directory so concurrent sessions (e.g. parallel test binaries) do not
    /// contend for profile locks.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Launch`] if the browser configuration is
    /// invalid or the browser process cannot be started.
    pub async fn launch(settings: &BrowserSettings) -> ProbeResult<Self> {
        let mut builder = BrowserConfig::builder();

        if let Some(executable) = &settings.executable {
            debug!("Using configured browser executable: {}", executable.display());
            builder = builder.chrome_executable(executable);
        }
        if settings.headed {
            builder = builder.with_head();
        }

        let session_id = SESSION_ID.fetch_add(1, Ordering::SeqCst);
        let user_data_dir = std::env::temp_dir().join(format!(
            "a11y-harness-{}-{}",
            std::process::id(),
            session_id
        ));
        builder = builder.user_data_dir(user_data_dir);

        let config = builder.build().map_err(ProbeError::Launch)?;

        info!("Launching browser");
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| ProbeError::Launch(e.to_string()))?;

        // Drain browser events until the stream errors or the session closes.
        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        // Give the browser a moment to fully initialize.
        tokio::time::sleep(Duration::from_millis(500)).await;

        info!("Browser launched");
        Ok(Self {
            browser,
            handler: handle,
        })
    }

    /// Open the session's page.
    ///
    /// Probes run against exactly one page; call this once per session.
    pub async fn open_page(&self) -> ProbeResult<Page> {
        let page = self.browser.new_page("about:blank").await?;
        Ok(page)
    }

    /// Close the browser and stop the event-handler task.
    ///
    /// Teardown is best effort and never fails: a session that cannot shut
    /// down cleanly is logged and abandoned so the probe outcome still
    /// propagates.
    pub async fn close(mut self) {
        debug!("Closing browser session");
        if let Err(e) = self.browser.close().await {
            warn!("Browser did not close cleanly: {}", e);
        }
        self.handler.abort();
    }
}
