//! Accessibility verification harness for the date-picker UI
//!
//! This crate drives a locally-installed headless Chrome (via the Chrome
//! DevTools Protocol) against a running instance of the application to
//! verify the accessibility contract of its date-picker component and to
//! capture screenshot evidence for manual review.
//!
//! # Probes
//!
//! - **Calendar probe** ([`probes::calendar::CalendarProbe`], binary
//!   `verify-calendar`): asserts ARIA labels, popup indicators, and the
//!   expanded-state transition on the `/test-calendar` route. Fail-fast;
//!   writes `failure.png` before propagating a failed check.
//! - **Access probe** ([`probes::access::AccessProbe`], binary
//!   `check-access`): exploratory reachability check of the application
//!   root and the `/scheduler` route. Captures screenshots and titles,
//!   makes no assertions.
//!
//! # Example
//!
//! ```no_run
//! use a11y_harness::{Config, Session};
//! use a11y_harness::probes::calendar::CalendarProbe;
//! use a11y_harness::reporter::{OutputFormat, Reporter};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::default();
//!
//! let session = Session::launch(&config.browser).await?;
//! let page = session.open_page().await?;
//!
//! let outcome = CalendarProbe::new(config).run(&page).await;
//! session.close().await;
//!
//! let report = outcome?;
//! Reporter::new(OutputFormat::Console).report(&report)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Both binaries run without arguments against `http://localhost:3000`;
//! an optional TOML file overrides any subset of the defaults:
//!
//! ```toml
//! [target]
//! base_url = "http://localhost:3000"
//! calendar_route = "/test-calendar"
//! scheduler_route = "/scheduler"
//!
//! [evidence]
//! dir = "verification"
//!
//! [reference]
//! year = 2024
//! month = 1
//! day = 1
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod evidence;
pub mod probes;
pub mod reporter;
pub mod session;

// Re-export main types for convenience
pub use config::Config;
pub use error::{ProbeError, ProbeResult};
pub use probes::{CheckResult, PageVisit, ProbeReport};
pub use reporter::{OutputFormat, Reporter};
pub use session::Session;
