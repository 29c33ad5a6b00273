//! In-memory backend for page tests

use crate::api::types::*;
use crate::api::StorefrontApi;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Canned backend; a `None` field makes that endpoint fail with a 500
pub(crate) struct FixtureApi {
    pub health: Option<HealthStatus>,
    pub products: Option<Vec<Product>>,
    pub rates: Option<Vec<MetalRate>>,
    pub customers: Option<Vec<Customer>>,
    /// Delay before every answer
    pub latency: Duration,
    pub calls: AtomicUsize,
}

impl FixtureApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn answer<T: Clone>(&self, path: &str, value: &Option<T>) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        value.clone().ok_or_else(|| AppError::Status {
            path: path.to_string(),
            status: 500,
        })
    }
}

impl Default for FixtureApi {
    fn default() -> Self {
        Self {
            health: Some(HealthStatus {
                status: "healthy".to_string(),
                message: "Masi Jewellers Backend Running!".to_string(),
                database: "connected".to_string(),
                timestamp: None,
            }),
            products: Some(vec![
                product(10, "Gold Ring"),
                product(11, "Silver Chain"),
                product(12, "Diamond Earrings"),
                product(13, "Gold Bangle"),
            ]),
            rates: Some(vec![rate(1, "gold", 6200.0), rate(2, "silver", 78.5)]),
            customers: Some(vec![
                customer(4, "Anita Rao", Some("anita@example.com")),
                customer(5, "Vikram Singh", None),
            ]),
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }
}

pub(crate) fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        metal_type: "gold".to_string(),
        weight_grams: 5.5,
        making_charges: Some(1200.0),
        current_price: Some(35300.0),
        stock_quantity: Some(4),
        hallmark_number: Some(format!("BIS-{}", id)),
    }
}

pub(crate) fn rate(id: i64, metal_type: &str, rate_per_gram: f64) -> MetalRate {
    MetalRate {
        id,
        metal_type: metal_type.to_string(),
        rate_per_gram,
        date: "2026-10-19".to_string(),
    }
}

pub(crate) fn customer(id: i64, name: &str, email: Option<&str>) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        phone: format!("+91-90000000{:02}", id),
        email: email.map(str::to_string),
        customer_type: CustomerType::Regular,
        kyc_verified: false,
        total_purchases: None,
        created_at: None,
    }
}

#[async_trait]
impl StorefrontApi for FixtureApi {
    async fn health_check(&self) -> Result<HealthStatus> {
        self.answer("/api/health", &self.health).await
    }

    async fn get_products(&self) -> Result<Vec<Product>> {
        self.answer("/api/products", &self.products).await
    }

    async fn get_metal_rates(&self) -> Result<Vec<MetalRate>> {
        self.answer("/api/rates", &self.rates).await
    }

    async fn get_customers(&self) -> Result<Vec<Customer>> {
        self.answer("/api/customers", &self.customers).await
    }

    async fn search_customers(&self, query: &str) -> Result<Vec<Customer>> {
        let query = query.to_lowercase();
        let customers = self.answer("/api/customers", &self.customers).await?;
        Ok(customers
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .collect())
    }

    async fn get_customer(&self, id: i64) -> Result<Customer> {
        let path = format!("/api/customers/{}", id);
        self.answer(&path, &self.customers)
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(AppError::Status { path, status: 404 })
    }
}
