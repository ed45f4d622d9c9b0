pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::Config;
use routes::{create_router, AppState};
use services::{ChatCompletionClient, CuratorSettings};

/// Builds the application state from configuration
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let client = ChatCompletionClient::new(config)?;
    Ok(AppState::new(Arc::new(client), CuratorSettings::from(config)))
}

/// Binds the listener and serves until Ctrl-C or SIGTERM
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        model = %config.completion_model,
        "Curator API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
