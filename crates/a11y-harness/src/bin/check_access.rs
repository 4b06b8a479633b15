//! Check whether the scheduler route is reachable without authentication
//!
//! Usage: cargo run -p a11y-harness --bin check-access -- [config.toml]
//!
//! Exploratory: captures screenshots and page titles of the application
//! root and the scheduler route for manual inspection. Makes no
//! assertions and reports no pass/fail outcome.

use std::env;

use anyhow::Result;

use a11y_harness::probes::access::AccessProbe;
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

    let report_path = config.evidence.dir.join("access_report.json");

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
    let report = AccessProbe::new(config).run(&page).await?;
    Ok(report)
}
