//! HTTP client for the jewellery REST backend

use crate::api::types::*;
use crate::api::StorefrontApi;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Timeout applied to every backend request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const HEALTH_PATH: &str = "/api/health";
const PRODUCTS_PATH: &str = "/api/products";
const RATES_PATH: &str = "/api/rates";
const CUSTOMERS_PATH: &str = "/api/customers";

/// reqwest-backed [`StorefrontApi`]
///
/// Stateless between calls: every operation is a single GET with no retry.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for `base_url` with the standard 10 second timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("Invalid API base URL '{}': {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(Self::get_headers())
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from the storefront configuration
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        Self::with_timeout(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run one GET, logging the failure under `operation` before handing it back
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let result = self.fetch(path, query).await;

        if let Err(e) = &result {
            error!("{} failed: {}", operation, e);
        }

        result
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("GET {} -> {}", path, status);

        if !status.is_success() {
            return Err(AppError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl StorefrontApi for ApiClient {
    async fn health_check(&self) -> Result<HealthStatus> {
        self.get_json("Health check", HEALTH_PATH, &[]).await
    }

    async fn get_products(&self) -> Result<Vec<Product>> {
        self.get_json("Get products", PRODUCTS_PATH, &[]).await
    }

    async fn get_metal_rates(&self) -> Result<Vec<MetalRate>> {
        self.get_json("Get rates", RATES_PATH, &[]).await
    }

    async fn get_customers(&self) -> Result<Vec<Customer>> {
        self.get_json("Get customers", CUSTOMERS_PATH, &[]).await
    }

    async fn search_customers(&self, query: &str) -> Result<Vec<Customer>> {
        self.get_json("Search customers", CUSTOMERS_PATH, &[("search", query)])
            .await
    }

    async fn get_customer(&self, id: i64) -> Result<Customer> {
        let path = format!("{}/{}", CUSTOMERS_PATH, id);
        self.get_json("Get customer", &path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::{HeaderMap as AxumHeaders, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    /// Serve `router` on an ephemeral loopback port and return its base URL
    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn health(headers: AxumHeaders) -> impl IntoResponse {
        if headers.get("content-type").and_then(|v| v.to_str().ok()) != Some("application/json") {
            return (StatusCode::UNSUPPORTED_MEDIA_TYPE, Json(json!({}))).into_response();
        }
        Json(json!({
            "status": "healthy",
            "message": "Masi Jewellers Backend Running!",
            "timestamp": "2026-10-19T04:30:00Z",
            "database": "connected"
        }))
        .into_response()
    }

    async fn customers(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        let name = match params.get("search") {
            Some(q) => format!("match:{}", q),
            None => "everyone".to_string(),
        };
        Json(json!([{ "id": 1, "name": name, "phone": "+91-1" }]))
    }

    async fn customer(Path(id): Path<i64>) -> impl IntoResponse {
        if id == 404 {
            return StatusCode::NOT_FOUND.into_response();
        }
        Json(json!({ "id": id, "name": "Priya Sharma", "phone": "+91-9876543211" })).into_response()
    }

    fn backend() -> Router {
        Router::new()
            .route("/api/health", get(health))
            .route(
                "/api/rates",
                get(|| async {
                    Json(json!([
                        { "id": 2, "metal_type": "silver", "rate_per_gram": 78.5, "date": "2026-10-19" },
                        { "id": 1, "metal_type": "gold", "rate_per_gram": 6200, "date": "2026-10-19" }
                    ]))
                }),
            )
            .route(
                "/api/products",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }),
            )
            .route("/api/customers", get(customers))
            .route("/api/customers/:id", get(customer))
    }

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new("http://localhost:3001/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(client.url(HEALTH_PATH), "http://localhost:3001/api/health");
    }

    #[test]
    fn test_relative_base_url_rejected() {
        assert!(matches!(ApiClient::new(""), Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_health_check_sends_json_content_type() {
        let client = ApiClient::new(&spawn_backend(backend()).await).unwrap();
        let health = client.health_check().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.database, "connected");
    }

    #[tokio::test]
    async fn test_rates_keep_backend_order() {
        let client = ApiClient::new(&spawn_backend(backend()).await).unwrap();
        let rates = client.get_metal_rates().await.unwrap();
        let ids: Vec<i64> = rates.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(rates[1].rate_per_gram, 6200.0);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let client = ApiClient::new(&spawn_backend(backend()).await).unwrap();
        match client.get_products().await {
            Err(AppError::Status { path, status }) => {
                assert_eq!(path, "/api/products");
                assert_eq!(status, 500);
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_fetch_failure() {
        let router = Router::new().route("/api/customers", get(|| async { "not json" }));
        let client = ApiClient::new(&spawn_backend(router).await).unwrap();
        let err = client.get_customers().await.unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_search_and_lookup_customers() {
        let client = ApiClient::new(&spawn_backend(backend()).await).unwrap();

        let all = client.get_customers().await.unwrap();
        assert_eq!(all[0].name, "everyone");

        let found = client.search_customers("priya sharma").await.unwrap();
        assert_eq!(found[0].name, "match:priya sharma");

        let one = client.get_customer(2).await.unwrap();
        assert_eq!(one.id, 2);

        let missing = client.get_customer(404).await.unwrap_err();
        assert!(matches!(missing, AppError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_timeout_is_fetch_failure() {
        let router = Router::new().route(
            "/api/health",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "late"
            }),
        );
        let base = spawn_backend(router).await;
        let client = ApiClient::with_timeout(&base, Duration::from_millis(100)).unwrap();

        match client.health_check().await {
            Err(AppError::Http(e)) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
        let err = client.get_metal_rates().await.unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }
}
