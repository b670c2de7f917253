use anyhow::{Context, Result};
use clap::Parser;
use hp_server::{Arguments, CharacterSlot, Configuration, router};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let arguments = Arguments::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Configuration::resolve(&arguments)?;
    debug!("Configuration loaded: {:?}", config);

    let slot = CharacterSlot::new(config.source(), config.seed);
    // Load eagerly so a broken definition shows up at startup, not on first request.
    if let Err(e) = slot.get().await {
        warn!("Initial character load failed: {}", e);
    }

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Listening on http://{}", config.bind);

    axum::serve(listener, router(slot))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .context("server error")?;
    Ok(())
}
