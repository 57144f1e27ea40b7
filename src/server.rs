use crate::config::{Config, SERVICE_HOST};
use crate::handlers;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Receives the startup announcement once the listener is bound.
pub trait StartupReporter: Send + Sync {
    fn server_started(&self, config: &Config, addr: SocketAddr);
}

/// Prints the startup banner to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl StartupReporter for StdoutReporter {
    fn server_started(&self, config: &Config, addr: SocketAddr) {
        println!("{}", config.startup_banner(addr.port()));
    }
}

/// Every request lands on the fallback, whatever its method or path.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `0.0.0.0:<port>` and serves until the process exits.
///
/// A bind failure is returned as-is; there is no retry.
pub async fn run<R: StartupReporter>(config: Config, reporter: R) -> Result<()> {
    let addr = format!("{}:{}", SERVICE_HOST, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    serve(listener, config, reporter).await
}

/// Serves on an already bound listener.
pub async fn serve<R: StartupReporter>(
    listener: TcpListener,
    config: Config,
    reporter: R,
) -> Result<()> {
    let local_addr = listener.local_addr()?;
    reporter.server_started(&config, local_addr);
    tracing::info!("Listening on {}", local_addr);

    let app = build_router(AppState::new(config));
    axum::serve(listener, app).await?;

    Ok(())
}
