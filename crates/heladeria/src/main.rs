use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use heladeria::api::{self, AppState};
use heladeria::config::Config;
use heladeria::lifecycle::OrderSystem;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_tracing();

    let config = Config::from_env().context("invalid configuration")?;
    info!(environment = %config.environment, mailbox_size = config.mailbox_size, "Starting heladeria");

    let system = OrderSystem::start(&config)
        .await
        .context("failed to start actors")?;

    let app = api::router(AppState::new(&system));
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(addr = %config.bind_addr(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // The router's clones of the clients are gone once serve returns.
    system.shutdown().await?;
    info!("Bye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
    }
    info!("Shutdown signal received");
}
