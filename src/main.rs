use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;

use fwew_api::engine::BundledEngine;
use fwew_api::{AppState, Config, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt().with_target(false).init();

    tracing::info!("🚀 Starting fwew API server");

    let config = Config::load();
    tracing::info!("📖 Web root: {}", config.web_root);

    // The dictionary engine initializes once; every request shares it.
    let engine = Arc::new(BundledEngine::new());
    let state = AppState::new(engine, config.clone());
    tracing::info!(
        "✅ Dictionary loaded: {} entries, engine {}",
        state.engine.dict_len(),
        state.version.fwew_version
    );

    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🌐 Server starting on http://{}", addr);
    tracing::info!("📡 Endpoint catalog at /api/");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server shutdown complete");
    Ok(())
}

// Handles both interactive (Ctrl+C) and system (SIGTERM) shutdown signals.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
