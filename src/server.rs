// server.rs - Process lifecycle: open storage, serve, drain, close storage

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::app::{app, AppState};
use crate::config::AppConfig;
use crate::database;

pub async fn serve(config: AppConfig) -> Result<()> {
    config.validate().map_err(anyhow::Error::msg).context("invalid configuration")?;
    info!(
        "Starting Portfolio API in {:?} mode with {:?} storage",
        config.environment, config.database.backend
    );

    let store = database::connect(&config)
        .await
        .context("failed to open storage")?;

    let bind_addr = format!("{}:{}", config.server.bind_addr, config.server.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Portfolio API listening on http://{}", bind_addr);

    let router = app(AppState::new(store.clone(), config));
    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Requests have drained by now, so the handle can be released
    store.close().await;
    info!("Storage closed");

    served.context("server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
