// ABOUTME: Best-effort browser opening after startup: app window, default browser, or neither.
// ABOUTME: Failures are logged and swallowed; the server never depends on this.

use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::BrowserMode;

/// Delay before the launch fires, giving the listener time to come up.
/// A heuristic, not a barrier: the launch is best-effort either way.
const LAUNCH_DELAY: Duration = Duration::from_millis(1500);

/// App-mode browser commands to try in order. Chrome and Chromium get a
/// real standalone window; Firefox has no app mode, so a new window is
/// the closest it offers.
fn app_mode_candidates(url: &str) -> Vec<(&'static str, Vec<String>)> {
    vec![
        ("google-chrome", vec![format!("--app={url}")]),
        ("chromium", vec![format!("--app={url}")]),
        ("firefox", vec!["--new-window".to_string(), url.to_string()]),
    ]
}

/// Spawn the one-shot browser task: wait briefly, then open `url`
/// according to `mode`. Runs detached from the accept loop, fires exactly
/// once, and is never retried.
pub fn spawn_browser_task(url: String, mode: BrowserMode) {
    tokio::spawn(async move {
        tokio::time::sleep(LAUNCH_DELAY).await;
        open_browser(&url, mode);
    });
}

/// Open `url` per `mode`. Every failure path degrades to printing the URL.
pub fn open_browser(url: &str, mode: BrowserMode) {
    match mode {
        BrowserMode::None => {
            info!(%url, "browser auto-open disabled");
            println!("Server running at {url}");
            println!("Browser auto-open disabled. Please open manually.");
        }
        BrowserMode::App => {
            if try_app_mode(url) {
                info!(%url, "opened standalone app window");
            } else {
                open_default(url);
            }
        }
        BrowserMode::Default => open_default(url),
    }
}

/// Try the app-mode candidate chain, first successful spawn wins. Only
/// Linux has app-mode commands; other platforms fall through to the
/// default browser.
fn try_app_mode(url: &str) -> bool {
    if !cfg!(target_os = "linux") {
        return false;
    }
    for (program, args) in app_mode_candidates(url) {
        match Command::new(program)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_) => {
                debug!(browser = program, "app-mode browser spawned");
                return true;
            }
            Err(e) => {
                debug!(browser = program, error = %e, "app-mode candidate unavailable");
            }
        }
    }
    false
}

/// Hand the URL to whatever the OS has registered for http.
fn open_default(url: &str) {
    println!("Opening in browser at {url}");
    if let Err(e) = open::that(url) {
        warn!(%url, error = %e, "failed to open browser");
        println!("Server running at {url}");
    }
}
