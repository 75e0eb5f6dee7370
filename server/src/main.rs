//! Host process for the recipe finder: loads config, builds the router,
//! and serves the SSR shell until shutdown.

mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "recipe finder host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let addr = config.addr();
    let app = routes::app(config.leptos_options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(port = config.port, "recipe finder listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
