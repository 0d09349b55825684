// ABOUTME: Configuration loading for the fasthtml-demo server.
// ABOUTME: Reads FASTHTML_* environment variables once at startup into AppConfig.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FASTHTML_PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// How the listening port should be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortRequest {
    /// Bind exactly this port.
    Fixed(u16),
    /// Ask the OS for a free ephemeral port.
    Auto,
}

/// Browser launch behavior, selected by FASTHTML_BROWSER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserMode {
    /// Open the URL in the default browser. Also the fallback for any
    /// unrecognized value.
    Default,
    /// Try a standalone app window first, then fall back to Default.
    App,
    /// Print the URL and spawn nothing.
    None,
}

impl BrowserMode {
    fn parse(value: Option<String>) -> Self {
        match value.map(|v| v.to_ascii_lowercase()).as_deref() {
            Some("app") => BrowserMode::App,
            Some("none") => BrowserMode::None,
            _ => BrowserMode::Default,
        }
    }
}

/// Startup configuration resolved once from the environment and passed
/// down; nothing re-reads these variables later.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: PortRequest,
    pub browser: BrowserMode,
    /// True when the APPIMAGE marker is present, i.e. the process runs
    /// from a packaged bundle whose own location may be read-only.
    pub packaged: bool,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - FASTHTML_PORT: port to bind; "0" or absent requests auto-assignment
    /// - FASTHTML_HOST: bind address (default: 127.0.0.1)
    /// - FASTHTML_BROWSER: "app", "none", or anything else for the default browser
    /// - APPIMAGE: presence marks packaged-bundle execution
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("FASTHTML_PORT") {
            Ok(raw) if raw != "0" => {
                let port = raw
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort(raw))?;
                PortRequest::Fixed(port)
            }
            _ => PortRequest::Auto,
        };

        let host = std::env::var("FASTHTML_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let browser = BrowserMode::parse(std::env::var("FASTHTML_BROWSER").ok());
        let packaged = std::env::var_os("APPIMAGE").is_some();

        Ok(Self {
            host,
            port,
            browser,
            packaged,
        })
    }
}
