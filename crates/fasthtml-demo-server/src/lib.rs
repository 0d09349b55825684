// ABOUTME: HTTP server for fasthtml-demo: config, port/workdir resolution, router, browser launch.
// ABOUTME: Uses Axum with Askama templates; fragments update the page via HTMX swaps.

pub mod app_state;
pub mod config;
pub mod launch;
pub mod net;
pub mod routes;
pub mod runtime;
pub mod web;

pub use app_state::{AppState, SharedState};
pub use config::{AppConfig, BrowserMode, ConfigError, PortRequest};
pub use routes::create_router;
