//! Devfolio - developer profile service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use devfolio_api::{init_tracing, router, AppContext};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the subscriber reads RUST_LOG
    let dotenv = dotenvy::dotenv();
    init_tracing();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => warn!(error = %e, "could not load .env file"),
    }

    let config = devfolio_infra::config::load().context("failed to load configuration")?;
    let bind_address = config.server.bind_address();

    let ctx = AppContext::new(config).context("failed to initialise application context")?;
    let app = router(Arc::new(ctx));

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %bind_address, "devfolio listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("devfolio stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
