//! Error types for browser automation and accessibility checks

use std::path::PathBuf;

use chromiumoxide::error::CdpError;
use thiserror::Error;

/// Result alias used throughout the harness.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors raised while driving the browser or verifying accessibility state.
///
/// Automation-layer failures (launch, navigation, CDP transport) carry their
/// source error unmodified; assertion failures carry the accessible label of
/// the offending element and the observed state so the failing condition is
/// readable straight from the error message.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("navigation to {url} failed")]
    Navigation {
        url: String,
        #[source]
        source: CdpError,
    },

    #[error("no element with accessible label {label:?} after {waited_ms}ms")]
    ElementNotFound { label: String, waited_ms: u64 },

    #[error("element {label:?} did not become visible after {waited_ms}ms")]
    NotVisible { label: String, waited_ms: u64 },

    #[error("text {text:?} is not visible on the page after {waited_ms}ms")]
    TextNotVisible { text: String, waited_ms: u64 },

    #[error("element {label:?} has no {attribute:?} attribute")]
    AttributeMissing { label: String, attribute: String },

    #[error(
        "element {label:?} attribute {attribute:?} is {actual:?}, expected {expected:?}"
    )]
    AttributeMismatch {
        label: String,
        attribute: String,
        expected: String,
        actual: String,
    },

    #[error("accessible label {label:?} unexpectedly contains {needle:?}")]
    ForbiddenLabelText { label: String, needle: String },

    #[error("invalid reference date {year}-{month}-{day} in configuration")]
    InvalidReferenceDate { year: i32, month: u32, day: u32 },

    #[error("could not create evidence directory {path}")]
    EvidenceDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write screenshot to {path}")]
    Screenshot {
        path: PathBuf,
        #[source]
        source: CdpError,
    },

    #[error(transparent)]
    Browser(#[from] CdpError),
}
