// ABOUTME: Shared application state for the fasthtml-demo HTTP server.
// ABOUTME: Holds the locked demo store plus immutable startup facts.

use std::sync::Arc;

use fasthtml_demo_core::DemoState;
use tokio::sync::RwLock;

/// Shared state accessible by all Axum handlers.
///
/// The demo store sits behind a write lock so concurrent requests cannot
/// lose counter increments or interleave todo appends. The endpoint and
/// packaged flag are fixed at startup.
pub struct AppState {
    pub demo: RwLock<DemoState>,
    pub host: String,
    pub port: u16,
    pub packaged: bool,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState with an empty demo store.
    pub fn new(host: impl Into<String>, port: u16, packaged: bool) -> Self {
        Self {
            demo: RwLock::new(DemoState::new()),
            host: host.into(),
            port,
            packaged,
        }
    }
}
