use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use webhook_tester::client::ReqwestClient;
use webhook_tester::config::Config;
use webhook_tester::handlers::{AppState, create_router};
use webhook_tester::services::RelayService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize configuration
    let config = Config::from_env()?;

    let client = ReqwestClient::with_timeouts(config.relay_timeout, config.relay_connect_timeout)?;

    let app_state = AppState {
        relay_service: RelayService::new(client),
    };

    // Build the application
    let app = create_router(app_state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    // Log startup information
    config.log_startup_info();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
