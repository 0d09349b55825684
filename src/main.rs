// ABOUTME: Entry point for the fasthtml-demo binary.
// ABOUTME: Resolves config, working directory, and port, then serves and opens the browser.

use std::sync::Arc;

use anyhow::Context;
use fasthtml_demo_server::{AppConfig, AppState, create_router, launch, net, runtime};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fasthtml_demo=info,tower_http=info".parse().unwrap()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let work_dir = runtime::prepare_work_dir(config.packaged)
        .context("failed to prepare working directory")?;
    let port = net::resolve_port(&config.host, config.port)
        .context("failed to resolve listening port")?;
    let url = format!("http://{}:{}", config.host, port);

    let state = Arc::new(AppState::new(config.host.clone(), port, config.packaged));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {url}"))?;

    // Fire-and-forget: the browser opens after a short delay, once.
    launch::spawn_browser_task(url.clone(), config.browser);

    tracing::info!(%url, work_dir = %work_dir.display(), "starting server");
    println!("Starting server on {url}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
