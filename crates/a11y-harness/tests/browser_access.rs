//! End-to-end tests for the exploratory reachability probe
//!
//! These tests require Chrome/Chromium to be installed. To skip them
//! locally when Chrome isn't available:
//!   SKIP_BROWSER_TESTS=1 cargo test -p a11y-harness --test browser_access

mod common;

use std::path::PathBuf;

use a11y_harness::probes::access::AccessProbe;
use a11y_harness::Config;
use common::browser;
use common::fixture::{self, Fixture};

fn test_config(base_url: &str, evidence_dir: PathBuf) -> Config {
    let mut config = Config::default();
    config.target.base_url = base_url.to_string();
    config.evidence.dir = evidence_dir;
    config.timeouts.element_ms = 2000;
    config.timeouts.idle_settle_ms = 100;
    config
}

#[tokio::test]
async fn test_access_probe_records_visits_without_verdict() {
    skip_if_no_chrome!();

    let Some((browser, _handle)) = browser::require_browser().await else {
        return;
    };

    let fixture = Fixture::serve(fixture::CALENDAR_PAGE).await;
    let page = browser
        .new_page("about:blank")
        .await
        .expect("should create page");

    let evidence_dir = std::env::temp_dir().join(format!(
        "a11y-harness-evidence-access-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&evidence_dir);
    let config = test_config(&fixture.base_url, evidence_dir.clone());

    let report = AccessProbe::new(config)
        .run(&page)
        .await
        .expect("exploratory probe has no assertions to fail");

    assert_eq!(report.passed, None, "exploratory probe reports no verdict");
    assert!(report.checks.is_empty());
    assert_eq!(report.visits.len(), 2);

    // Landing page: no redirect, title captured.
    assert_eq!(report.visits[0].title.as_deref(), Some("iConnect"));

    // Scheduler route redirects to the login page; the report shows it.
    let scheduler = &report.visits[1];
    assert!(scheduler.requested_url.ends_with("/scheduler"));
    assert!(
        scheduler
            .final_url
            .as_deref()
            .is_some_and(|url| url.ends_with("/login")),
        "redirect to login should be recorded, got {:?}",
        scheduler.final_url
    );

    assert!(evidence_dir.join("landing_page.png").exists());
    assert!(evidence_dir.join("scheduler_page.png").exists());

    fixture.stop();
}
