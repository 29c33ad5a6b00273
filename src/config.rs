//! Storefront configuration
//!
//! Loaded from an optional `storefront.toml` in the working directory,
//! then overridden by `STOREFRONT_*` environment variables
//! (e.g. `STOREFRONT_PORT=8080`, `STOREFRONT_CUSTOMER_SOURCE=sample`).

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

const CONFIG_FILE: &str = "storefront";
const ENV_PREFIX: &str = "STOREFRONT";

/// Where the customer page gets its rows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerSource {
    /// Hardcoded sample rows, no network
    Sample,
    /// `GET /api/customers` on the backend
    #[default]
    Live,
}

/// Storefront server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub customer_source: CustomerSource,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:3001".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            customer_source: CustomerSource::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from `storefront.toml` (optional) and the environment
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to read configuration: {}", e)))?;

        let config: StorefrontConfig = settings
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check that the values can actually be used to start the server
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        self.api_base()?;

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                AppError::Config(format!("Invalid address {}:{}: {}", self.host, self.port, e))
            })
    }

    /// Parsed backend base URL
    pub fn api_base(&self) -> Result<Url> {
        Url::parse(&self.api_base_url).map_err(|e| {
            AppError::Config(format!("Invalid api_base_url '{}': {}", self.api_base_url, e))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
