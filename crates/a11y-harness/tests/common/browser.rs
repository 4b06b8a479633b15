//! Browser bootstrap helpers for integration tests

use anyhow::Result;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::time::Duration;

/// Check if browser tests should be skipped (when Chrome isn't available)
pub fn should_skip() -> bool {
    std::env::var("SKIP_BROWSER_TESTS").is_ok()
}

/// Macro to skip a test when browser tests are disabled
#[macro_export]
macro_rules! skip_if_no_chrome {
    () => {
        if $crate::common::browser::should_skip() {
            eprintln!("Skipping test: SKIP_BROWSER_TESTS is set");
            return;
        }
    };
}

/// Helper to create a headless browser for testing
pub async fn create_test_browser() -> Result<(Browser, tokio::task::JoinHandle<()>)> {
    use std::sync::atomic::{AtomicU64, Ordering};
    static BROWSER_ID: AtomicU64 = AtomicU64::new(0);

    let mut builder = BrowserConfig::builder();

    // Unique user data directory so parallel test binaries don't contend
    // for profile locks.
    let browser_id = BROWSER_ID.fetch_add(1, Ordering::SeqCst);
    let user_data_dir = std::env::temp_dir().join(format!(
        "a11y-harness-test-{}-{}",
        std::process::id(),
        browser_id
    ));
    builder = builder.user_data_dir(user_data_dir);

    let config = builder
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build browser config: {}", e))?;

    let (browser, mut handler) = Browser::launch(config).await?;

    let handle = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                eprintln!("Browser handler error: {:?}", e);
                break;
            }
        }
    });

    // Give the browser a moment to fully initialize
    tokio::time::sleep(Duration::from_millis(500)).await;

    Ok((browser, handle))
}

/// Try to create a browser, skip the test if Chrome is not installed
pub async fn require_browser() -> Option<(Browser, tokio::task::JoinHandle<()>)> {
    match create_test_browser().await {
        Ok(browser) => Some(browser),
        Err(e) => {
            if e.to_string().contains("Could not auto detect") {
                eprintln!("Skipping: Chrome not installed ({})", e);
                None
            } else {
                panic!("Unexpected browser error: {}", e);
            }
        }
    }
}
