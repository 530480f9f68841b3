// Main entry point for API server

use anyhow::{Context, Result};
use server_core::{server::build_app, Config};
use server_core::domains::identity::actions::bootstrap_admin;
use server_core::kernel::ServerDeps;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NeighborNews API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Build dependencies and ensure the bootstrap admin exists
    let deps = ServerDeps::new(config.session_ttl_hours);
    bootstrap_admin(
        &config.admin_name,
        &config.admin_email,
        &config.admin_password,
        &deps,
    )
    .await
    .context("Failed to bootstrap admin account")?;

    // Prune expired sessions in the background
    let sessions = deps.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(3600));
        loop {
            interval.tick().await;
            sessions.cleanup_expired().await;
        }
    });

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
