//! Element location and accessibility-state reads
//!
//! Elements are located by their accessible label (the `aria-label`
//! exposed to assistive technology), compiled to CSS attribute selectors.
//! Every lookup auto-waits: it polls until the condition holds or the
//! configured element timeout elapses, then fails with the label and the
//! observed state. A one-shot check would race the application's render.

use std::time::{Duration, Instant};

use chromiumoxide::{Element, Page};
use tracing::debug;

use crate::config::TimeoutConfig;
use crate::error::{ProbeError, ProbeResult};

/// In-page visibility predicate: the element occupies a non-zero box and
/// no computed style hides it.
const VISIBILITY_FN: &str = r#"
function() {
    const rect = this.getBoundingClientRect();
    const style = window.getComputedStyle(this);
    return rect.width > 0 && rect.height > 0
        && style.visibility !== 'hidden'
        && style.display !== 'none';
}
"#;

/// CSS selector matching any element with the exact accessible label.
pub fn label_selector(label: &str) -> String {
    format!("[aria-label=\"{}\"]", escape_label(label))
}

/// CSS selector matching a button (native or `role="button"`) with the
/// exact accessible label.
pub fn button_label_selector(label: &str) -> String {
    let escaped = escape_label(label);
    format!(
        "button[aria-label=\"{escaped}\"], [role=\"button\"][aria-label=\"{escaped}\"]"
    )
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Find an element by accessible label, waiting for it to appear.
pub async fn find_by_label(
    page: &Page,
    label: &str,
    timeouts: &TimeoutConfig,
) -> ProbeResult<Element> {
    wait_for_element(page, &label_selector(label), label, timeouts).await
}

/// Find a button by accessible label, waiting for it to appear.
pub async fn find_button_by_label(
    page: &Page,
    label: &str,
    timeouts: &TimeoutConfig,
) -> ProbeResult<Element> {
    wait_for_element(page, &button_label_selector(label), label, timeouts).await
}

async fn wait_for_element(
    page: &Page,
    selector: &str,
    label: &str,
    timeouts: &TimeoutConfig,
) -> ProbeResult<Element> {
    debug!("Waiting for element {:?}", label);
    let deadline = Instant::now() + timeouts.element();
    loop {
        match page.find_element(selector).await {
            Ok(element) => return Ok(element),
            Err(_) if Instant::now() < deadline => {
                tokio::time::sleep(timeouts.poll()).await;
            }
            Err(_) => {
                return Err(ProbeError::ElementNotFound {
                    label: label.to_string(),
                    waited_ms: timeouts.element_ms,
                })
            }
        }
    }
}

/// Whether the element is currently visible.
pub async fn is_visible(element: &Element) -> ProbeResult<bool> {
    let returns = element.call_js_fn(VISIBILITY_FN, false).await?;
    Ok(returns
        .result
        .value
        .as_ref()
        .and_then(|v| v.as_bool())
        .unwrap_or(false))
}

/// Wait until the element is visible.
pub async fn wait_visible(
    element: &Element,
    label: &str,
    timeouts: &TimeoutConfig,
) -> ProbeResult<()> {
    let deadline = Instant::now() + timeouts.element();
    loop {
        if is_visible(element).await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(ProbeError::NotVisible {
                label: label.to_string(),
                waited_ms: timeouts.element_ms,
            });
        }
        tokio::time::sleep(timeouts.poll()).await;
    }
}

/// Read an attribute off an element.
pub async fn attribute(element: &Element, name: &str) -> ProbeResult<Option<String>> {
    Ok(element.attribute(name).await?)
}

/// Wait until an attribute holds the expected value.
///
/// Used for state transitions the application animates through, such as
/// `aria-expanded` flipping after a click. On timeout the error reports
/// the last observed value, or a missing attribute.
pub async fn expect_attribute_eq(
    element: &Element,
    label: &str,
    name: &str,
    expected: &str,
    timeouts: &TimeoutConfig,
) -> ProbeResult<()> {
    let deadline = Instant::now() + timeouts.element();
    let mut last: Option<String>;
    loop {
        last = element.attribute(name).await?;
        if last.as_deref() == Some(expected) {
            return Ok(());
        }
        if Instant::now() >= deadline {
            break;
        }
        tokio::time::sleep(timeouts.poll()).await;
    }
    match last {
        Some(actual) => Err(ProbeError::AttributeMismatch {
            label: label.to_string(),
            attribute: name.to_string(),
            expected: expected.to_string(),
            actual,
        }),
        None => Err(ProbeError::AttributeMissing {
            label: label.to_string(),
            attribute: name.to_string(),
        }),
    }
}

/// Whether the given text is visible anywhere on the page.
///
/// Walks the document's text nodes in-page and applies the same
/// visibility predicate as [`is_visible`] to the owning element.
pub async fn text_visible(page: &Page, text: &str) -> ProbeResult<bool> {
    let needle = serde_json::Value::String(text.to_string()).to_string();
    let script = format!(
        r#"(() => {{
            const needle = {needle};
            if (!document.body) return false;
            const walker = document.createTreeWalker(document.body, NodeFilter.SHOW_TEXT);
            while (walker.nextNode()) {{
                const node = walker.currentNode;
                if (!node.textContent.includes(needle)) continue;
                const el = node.parentElement;
                if (!el) continue;
                const rect = el.getBoundingClientRect();
                const style = window.getComputedStyle(el);
                if (rect.width > 0 && rect.height > 0
                    && style.visibility !== 'hidden'
                    && style.display !== 'none') {{
                    return true;
                }}
            }}
            return false;
        }})()"#
    );
    let result = page.evaluate(script).await?;
    Ok(result.value().and_then(|v| v.as_bool()).unwrap_or(false))
}

/// Wait until the given text is visible on the page.
pub async fn wait_for_text(
    page: &Page,
    text: &str,
    timeouts: &TimeoutConfig,
) -> ProbeResult<()> {
    debug!("Waiting for text {:?}", text);
    let deadline = Instant::now() + timeouts.element();
    loop {
        if text_visible(page, text).await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(ProbeError::TextNotVisible {
                text: text.to_string(),
                waited_ms: timeouts.element_ms,
            });
        }
        tokio::time::sleep(timeouts.poll()).await;
    }
}

/// Navigate the page, attaching the URL to any failure.
pub async fn navigate(page: &Page, url: &str) -> ProbeResult<()> {
    let navigated = page.goto(url).await;
    if let Err(source) = navigated {
        return Err(ProbeError::Navigation {
            url: url.to_string(),
            source,
        });
    }
    Ok(())
}

/// Block until network activity has quiesced.
///
/// Approximated as the CDP navigation-settled wait plus a fixed settle
/// delay for straggling requests the lifecycle events do not cover.
pub async fn wait_for_idle(page: &Page, settle: Duration) -> ProbeResult<()> {
    debug!("Waiting for network idle");
    page.wait_for_navigation().await?;
    tokio::time::sleep(settle).await;
    Ok(())
}
