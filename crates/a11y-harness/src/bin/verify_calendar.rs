//! Verify the ARIA contract of the calendar test page
//!
//! Usage: cargo run -p a11y-harness --bin verify-calendar -- [config.toml]
//!
//! Exits 0 when every check passes; exits non-zero on the first failed
//! check, after writing `failure.png` into the evidence directory.

use std::env;

use anyhow::Result;

use a11y_harness::probes::calendar::CalendarProbe;
use a11y_harness::probes::ProbeReport;
use a11y_harness::reporter::{OutputFormat, Reporter};
use a11y_harness::{Config, Session};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let report_path = config.evidence.dir.join("calendar_report.json");

    let session = Session::launch(&config.browser).await?;
    let outcome = run(&session, config).await;
    session.close().await;

    let report = outcome?;
    Reporter::new(OutputFormat::Console).report(&report)?;
    Reporter::new(OutputFormat::JsonPretty).write_to_file(&report, report_path)?;

    Ok(())
}

async fn run(session: &Session, config: Config) -> Result<ProbeReport> {
    let page = session.open_page().await?;
    let report = CalendarProbe::new(config).run(&page).await?;
    Ok(report)
}
