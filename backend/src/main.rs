//! Main entry point for the RSVP backend.
//!
//! This file initializes logging, loads configuration, prepares the database
//! schema, and starts the Axum web server.

use anyhow::Result;
use rsvp_backend::app::create_app;
use rsvp_backend::config::Config;
use rsvp_backend::database::Database;
use rsvp_backend::services::id_issuer::IdIssuer;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() -> Result<()> {
    init();

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;
    db.init_schema().await?;

    let issuer = IdIssuer::from_config(&config);
    let app = create_app(db.pool().clone(), issuer);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Starting RSVP server on port {}", config.server_port);
    axum::serve(listener, app).await?;

    db.close().await;
    Ok(())
}
