// Main entry point for the portfolio access server

use anyhow::{Context, Result};
use server_core::config::{mask_value, CONFIG_ENV_VARS};
use server_core::server::{build_app, build_server_deps};
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting portfolio access server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Masked env dump for production troubleshooting
    tracing::info!("Environment variables:");
    for name in CONFIG_ENV_VARS {
        match std::env::var(name) {
            Ok(val) if val.is_empty() => tracing::info!("  {}: (empty)", name),
            Ok(val) => tracing::info!("  {}: {}", name, mask_value(&val)),
            Err(_) => tracing::info!("  {}: not set (default)", name),
        }
    }

    let deps = build_server_deps(&config)?;
    tracing::info!(
        owner = %deps.site.owner_name,
        base_url = %deps.site.public_base_url,
        notify_owner = deps.site.notify_owner_on_request,
        "Dependencies ready"
    );

    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
