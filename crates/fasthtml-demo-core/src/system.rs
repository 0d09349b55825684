// ABOUTME: Ambient process facts for the system-information panel.
// ABOUTME: Captured fresh on every call; nothing here is cached.

use chrono::Local;

/// A point-in-time view of the running process: pid, working directory,
/// packaged-bundle flag, and a human-readable local timestamp.
#[derive(Debug, Clone)]
pub struct SystemSnapshot {
    pub pid: u32,
    pub work_dir: String,
    pub packaged: bool,
    pub timestamp: String,
}

impl SystemSnapshot {
    /// Capture the current process facts. The working directory and
    /// timestamp are read at call time, so repeated captures reflect any
    /// changes since the last one.
    pub fn capture(packaged: bool) -> Self {
        let work_dir = std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "<unknown>".to_string());
        Self {
            pid: std::process::id(),
            work_dir,
            packaged,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
