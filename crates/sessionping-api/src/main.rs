//! SessionPing relay entry point.
//!
//! Binary name: `sessionping`
//!
//! Loads configuration from the environment, initializes the database
//! and services, then serves the HTTP surface until Ctrl+C or SIGTERM.

mod http;
mod state;

use sessionping_types::config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let enable_otel = std::env::var("SESSIONPING_OTEL").is_ok_and(|v| v == "1");
    sessionping_observe::tracing_setup::init_tracing(enable_otel)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let config = Config::from_env()?;
    let state = AppState::init(&config).await?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "SessionPing relay listening");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sessionping_observe::tracing_setup::shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
