//! Masi Jewellers - Storefront and Back-Office Dashboard
//!
//! Server-rendered storefront for a jewellery business: a landing page with
//! system health, today's metal rates and featured products, and a customer
//! management page. All data comes from the jewellery REST backend.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod services;
pub mod state;
pub mod views;

use config::StorefrontConfig;
use error::Result;
use server::StorefrontServer;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "masi_storefront=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load configuration and run the storefront until Ctrl+C
pub async fn run() -> Result<()> {
    init_tracing();

    tracing::info!("Starting Masi Jewellers storefront...");

    let config = StorefrontConfig::load()?;
    let addr = config.bind_addr()?;

    tracing::info!(
        "Customer page source: {:?}, request timeout: {}s",
        config.customer_source,
        config.request_timeout_secs
    );

    let state = Arc::new(AppState::new(config)?);
    let mut server = StorefrontServer::new(state);
    server.start(addr).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown requested");

    server.shutdown().await;
    Ok(())
}
