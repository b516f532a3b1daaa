//! Cargo Payments - payment record service for shipments.
//!
//! Accepts a card number for a shipment, stores the card record in the
//! card-data store and writes the masked card onto the shipment, using
//! bound parameters for every externally supplied value.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod engine;
mod error;
mod logging;
mod storage;

use crate::api::build_router;
use crate::config::Config;
use crate::engine::PaymentRecordHandler;
use crate::storage::{SqliteStore, StoreScope};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The payment record workflow.
    pub handler: Arc<PaymentRecordHandler>,
    /// Card-data store, kept for health checks.
    pub card_store: SqliteStore,
    /// Operations store, kept for health checks.
    pub operations_store: SqliteStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting Cargo Payments v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );

    // Connect to both stores
    let card_store = SqliteStore::connect(
        &config.database.card_data_url,
        config.database.max_connections,
        StoreScope::CardData,
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to card-data store");
        anyhow::anyhow!("Database connection error: {}", e)
    })?;

    let operations_store = SqliteStore::connect(
        &config.database.operations_url,
        config.database.max_connections,
        StoreScope::Operations,
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to operations store");
        anyhow::anyhow!("Database connection error: {}", e)
    })?;

    operations_store.ensure_shipment_schema().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize shipment schema");
        anyhow::anyhow!("Schema initialization error: {}", e)
    })?;

    tracing::info!(
        card_data = %card_store.scope(),
        operations = %operations_store.scope(),
        "Stores connected"
    );

    let handler = Arc::new(PaymentRecordHandler::new(
        Arc::new(card_store.clone()),
        Arc::new(operations_store.clone()),
    ));

    let state = AppState {
        handler,
        card_store,
        operations_store,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
