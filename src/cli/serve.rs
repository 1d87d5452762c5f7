//! HTTP server command handler.

use std::net::SocketAddr;
use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::http;

pub async fn run(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| {
            eyre!(
                "Invalid address {}:{}: {}",
                config.server.host,
                config.server.port,
                e
            )
        })?;
    let request_logging = config.server.request_logging;

    let ctx = Context::from(config).await?;
    let state = ctx.api_state()?;
    let app = http::router(Arc::new(state), request_logging);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!(
        app = %ctx.config.app_name,
        "six degrees API listening on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
            eyre!("HTTP server error: {}", e)
        })?;

    tracing::info!("HTTP server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
