// Main entry point for the memorial site API server

use std::sync::Arc;

use anyhow::{Context, Result};
use hommage_core::domains::notifications::NotificationRelay;
use hommage_core::kernel::{MailjetClient, ServerDeps};
use hommage_core::server::build_app;
use hommage_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hommage_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting memorial site API");

    // Load configuration; refuses to start without mail credentials
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(notify_to = %config.notify_to, "Configuration loaded");

    let mailer = MailjetClient::new(
        &config.mail_api_url,
        &config.email_user,
        &config.email_pass,
        &config.email_user,
        &config.sender_name,
    )
    .context("Failed to create mail client")?;

    let relay = NotificationRelay::new(Arc::new(mailer), &config.notify_to);
    let deps = ServerDeps::new(relay, config.production);
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);

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
