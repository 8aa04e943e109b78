pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod safety;
pub mod services;
pub mod state;

use std::sync::Arc;

use anyhow::Context;

use config::Config;
use state::AppState;

pub use routes::build_router;

pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(&config));
    if state.allow_protected_delete {
        tracing::warn!("protected-path delete guard is disabled");
    }
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(
        "fsbrowse listening on http://{} (default root {})",
        config.bind,
        state.default_root
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("fsbrowse stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
