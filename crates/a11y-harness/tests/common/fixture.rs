//! Local fixture server standing in for the application under test
//!
//! Serves a static rendering of the calendar test page (correct or
//! deliberately broken), a landing page, and a scheduler route that
//! redirects to a login page, on an ephemeral port.

use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Calendar test page with the full ARIA contract in place.
pub const CALENDAR_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Calendar Accessibility Test</title></head>
<body>
<h1>Calendar Accessibility Test</h1>
<div class="calendar">
  <div class="calendar-header">
    <button aria-label="Previous month">&lt;</button>
    <button aria-label="Select month" aria-haspopup="true" aria-expanded="false"
            onclick="this.setAttribute('aria-expanded', 'true')">January</button>
    <button aria-label="Select year" aria-haspopup="true" aria-expanded="false">2024</button>
    <button aria-label="Next month">&gt;</button>
  </div>
  <div class="calendar-grid">
    <button aria-label="Selected: 1 January 2024" aria-pressed="true">1</button>
    <button aria-label="2 January 2024">2</button>
    <button aria-label="3 January 2024">3</button>
  </div>
</div>
</body>
</html>
"#;

/// Calendar test page whose month/year selectors are missing
/// `aria-haspopup`.
#[allow(dead_code)]
pub const CALENDAR_PAGE_NO_HASPOPUP: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Calendar Accessibility Test</title></head>
<body>
<h1>Calendar Accessibility Test</h1>
<div class="calendar">
  <div class="calendar-header">
    <button aria-label="Previous month">&lt;</button>
    <button aria-label="Select month" aria-expanded="false"
            onclick="this.setAttribute('aria-expanded', 'true')">January</button>
    <button aria-label="Select year" aria-expanded="false">2024</button>
    <button aria-label="Next month">&gt;</button>
  </div>
  <div class="calendar-grid">
    <button aria-label="Selected: 1 January 2024" aria-pressed="true">1</button>
    <button aria-label="2 January 2024">2</button>
  </div>
</div>
</body>
</html>
"#;

const LANDING_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>iConnect</title></head>
<body><h1>Welcome to iConnect</h1></body>
</html>
"#;

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Sign in</title></head>
<body><h1>Sign in</h1><form><input name="email"><input name="password" type="password"></form></body>
</html>
"#;

/// A running fixture server.
pub struct Fixture {
    /// Base URL of the server, e.g. `http://127.0.0.1:49152`
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl Fixture {
    /// Serve the given calendar page alongside the landing/login routes.
    pub async fn serve(calendar_page: &'static str) -> Fixture {
        let app = Router::new()
            .route("/", get(|| async { Html(LANDING_PAGE) }))
            .route("/test-calendar", get(move || async move { Html(calendar_page) }))
            .route("/scheduler", get(|| async { Redirect::temporary("/login") }))
            .route("/login", get(|| async { Html(LOGIN_PAGE) }));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("fixture server should bind an ephemeral port");
        let addr = listener.local_addr().expect("fixture server address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("fixture server should run");
        });

        Fixture {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// Shut the server down.
    pub fn stop(self) {
        self.handle.abort();
    }
}
