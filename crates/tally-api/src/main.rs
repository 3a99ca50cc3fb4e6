//! tally API service binary.
//!
//! - REST surface: /, /health, /metrics, /api/counter, /api/info
//! - Config: optional tally.yaml plus MY_REDIS_HOST / MY_REDIS_PORT
//! - Store failures degrade responses, they never crash the process

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use tally_api::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load().expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    tracing::info!(
        store_host = %cfg.store.host,
        store_port = cfg.store.port,
        "store endpoint resolved"
    );

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "tally-api starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        tracing::info!("received SIGTERM, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
