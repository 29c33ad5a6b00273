//! Jewellery backend API module
//!
//! The pages only talk to the backend through [`StorefrontApi`], so they can
//! be driven by the HTTP client or by an in-memory source.

pub mod client;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;
use types::*;

pub use client::ApiClient;

/// Read-only operations offered by the jewellery REST backend
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET /api/health`
    async fn health_check(&self) -> Result<HealthStatus>;

    /// `GET /api/products`
    async fn get_products(&self) -> Result<Vec<Product>>;

    /// `GET /api/rates`
    async fn get_metal_rates(&self) -> Result<Vec<MetalRate>>;

    /// `GET /api/customers`
    async fn get_customers(&self) -> Result<Vec<Customer>>;

    /// `GET /api/customers?search=...` (name, phone or email match)
    async fn search_customers(&self, query: &str) -> Result<Vec<Customer>>;

    /// `GET /api/customers/{id}`
    async fn get_customer(&self, id: i64) -> Result<Customer>;
}
