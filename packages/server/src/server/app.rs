//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    middleware,
    routing::{get, post},
    Router,
};
use mailer::{MailerOptions, MailerService};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{
    BaseAccessLedger, BaseMailer, InMemoryAccessLedger, MailerAdapter, ServerDeps, SiteProfile,
};
use crate::server::middleware::extract_client_ip;
use crate::server::pages::serve_static;
use crate::server::routes::{
    approve_handler, health_handler, index_handler, portfolio_handler, request_access_handler,
    send_message_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

/// Wire production dependencies from configuration.
///
/// The ledger is in-memory: requests and tokens live for the life of the
/// process.
pub fn build_server_deps(config: &Config) -> Result<ServerDeps> {
    let mailer = MailerService::new(MailerOptions {
        host: config.smtp_host.clone(),
        port: config.smtp_port,
        username: config.email_address.clone(),
        password: config.email_password.clone(),
        from_name: config.owner_name.clone(),
        from_address: config.email_address.clone(),
    })
    .context("Failed to create mailer")?;

    let site = SiteProfile::new(
        config.owner_name.clone(),
        config.email_address.clone(),
        &config.public_base_url,
        config.notify_owner_on_request,
    )?;

    let ledger: Arc<dyn BaseAccessLedger> = Arc::new(InMemoryAccessLedger::new());
    let mailer: Arc<dyn BaseMailer> = Arc::new(MailerAdapter::new(Arc::new(mailer)));

    Ok(ServerDeps::new(ledger, mailer, site))
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AxumAppState {
        deps: Arc::new(deps),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/request_access", post(request_access_handler))
        .route("/approve/:request_id", get(approve_handler))
        .route("/portfolio/:token", get(portfolio_handler))
        .route("/send_message", post(send_message_handler))
        .route("/static/*path", get(serve_static))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(extract_client_ip))
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
}
