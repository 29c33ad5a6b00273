//! HTTP server for the storefront pages
//!
//! Provides:
//! - Landing page (`GET /`)
//! - Customer management page (`GET /customers`)
//! - Customer record lookup (`GET /customers/{id}`)
//! - Liveness check (`GET /health`)

pub mod handlers;

use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the storefront router
pub fn build_router(state: Arc<AppState>) -> Router {
    // Read-only pages, no credentials involved
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::landing_page))
        .route("/customers", get(handlers::customer_page))
        .route("/customers/:id", get(handlers::customer_detail))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Storefront server manager
pub struct StorefrontServer {
    state: Arc<AppState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl StorefrontServer {
    /// Create a new server
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            shutdown_tx: None,
            handle: None,
        }
    }

    /// Bind `addr` and start serving in the background
    ///
    /// Returns the bound address, which differs from `addr` when port 0 is used.
    pub async fn start(&mut self, addr: SocketAddr) -> Result<SocketAddr> {
        if self.is_running() {
            return Err(AppError::Internal("Server is already running".to_string()));
        }

        let app = build_router(self.state.clone());

        let listener = tokio::net::TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        self.shutdown_tx = Some(shutdown_tx);

        info!("Starting Masi Jewellers storefront on {}", local_addr);

        self.handle = Some(tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Storefront server shutting down");
            });

            if let Err(e) = server.await {
                error!("Storefront server error: {}", e);
            }
        }));

        info!("");
        info!("=== Pages ===");
        info!("  GET  http://{}/", local_addr);
        info!("  GET  http://{}/customers", local_addr);
        info!("");
        info!("=== Records ===");
        info!("  GET  http://{}/customers/{{id}}", local_addr);
        info!("  GET  http://{}/health", local_addr);

        Ok(local_addr)
    }

    /// Stop the server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            info!("Storefront server stop signal sent");
        }
    }

    /// Stop the server and wait for in-flight requests to finish
    pub async fn shutdown(&mut self) {
        self.stop();

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                error!("Storefront server task failed: {}", e);
            }
        }
    }

    /// Check if server is running
    pub fn is_running(&self) -> bool {
        self.shutdown_tx.is_some()
    }
}

impl Drop for StorefrontServer {
    fn drop(&mut self) {
        self.stop();
    }
}
