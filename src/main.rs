mod config;
mod handlers;
mod models;
mod response;
mod routes;
mod server;
mod state;

use config::Config;
use server::StdoutReporter;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "workflow_app=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; real environment variables win.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("workflow-app starting");
    if let Ok(path) = dotenv {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env();
    config.log_startup();

    server::run(config, StdoutReporter).await
}
