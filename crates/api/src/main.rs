use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use scriptbox_core::store::ScriptStore;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scriptbox_api::background::expiry_sweep;
use scriptbox_api::config::ServerConfig;
use scriptbox_api::router::build_app_router;
use scriptbox_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scriptbox_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        sweep_interval_secs = config.sweep_interval_secs,
        "Loaded server configuration"
    );
    tracing::warn!("Running as an open proxy: every route is unauthenticated");

    // --- Store ---
    // Lives only as long as this process; a restart starts empty.
    let store = Arc::new(ScriptStore::new());

    // --- Expiry sweep ---
    let sweep_cancel = CancellationToken::new();
    let sweep_handle = if config.sweep_interval_secs > 0 {
        Some(tokio::spawn(expiry_sweep::run(
            Arc::clone(&store),
            Duration::from_secs(config.sweep_interval_secs),
            sweep_cancel.clone(),
        )))
    } else {
        tracing::info!("Background expiry sweep disabled");
        None
    };

    // --- App state ---
    let state = AppState {
        store: Arc::clone(&store),
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    sweep_cancel.cancel();
    if let Some(handle) = sweep_handle {
        let wait = Duration::from_secs(config.shutdown_timeout_secs);
        if tokio::time::timeout(wait, handle).await.is_err() {
            tracing::warn!("Expiry sweep did not stop in time");
        }
    }

    tracing::info!(
        discarded = store.count(),
        "Graceful shutdown complete"
    );
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
