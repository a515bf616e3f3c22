use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use local_data_service::config::{Config, LogFormat};
use local_data_service::store::MemoryStore;
use local_data_service::{server, AppState};

#[tokio::main]
async fn main() {
    // ── 1. Configuration ─────────────────────────────────────────
    let config = Config::from_env().expect("invalid configuration");

    // ── 2. Logging ───────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    // ── 3. Seed the store ────────────────────────────────────────
    let store = Arc::new(MemoryStore::seeded());
    tracing::info!(
        events = store.event_count(),
        metrics = store.metric_count(),
        "seeded in-memory store"
    );

    // ── 4. Build Axum router ─────────────────────────────────────
    let app = server::create_router(AppState::new(store));

    // ── 5. Bind & serve ──────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.addr));

    tracing::info!(addr = %config.addr, "local data service listening");

    // In-flight requests drain before `serve` returns
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server exited with error");

    tracing::info!("local data service shut down");
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, draining connections"),
        () = terminate => tracing::info!("received SIGTERM, draining connections"),
    }
}
