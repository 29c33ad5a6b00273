//! Application state management

use crate::api::{ApiClient, StorefrontApi};
use crate::config::{CustomerSource, StorefrontConfig};
use crate::error::Result;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Only immutable pieces live here; each page load builds its own view state.
pub struct AppState {
    /// Backend API used by every page load
    pub api: Arc<dyn StorefrontApi>,

    /// Loaded configuration
    pub config: StorefrontConfig,
}

impl AppState {
    /// Create application state backed by the HTTP API client
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let api = ApiClient::from_config(&config)?;

        tracing::info!("Backend API: {}", api.base_url());

        Ok(Self {
            api: Arc::new(api),
            config,
        })
    }

    /// Create application state around an existing API implementation
    pub fn with_api(config: StorefrontConfig, api: Arc<dyn StorefrontApi>) -> Self {
        Self { api, config }
    }

    pub fn customer_source(&self) -> CustomerSource {
        self.config.customer_source
    }
}
