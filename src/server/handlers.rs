//! Page and API endpoint handlers

use crate::api::types::Customer;
use crate::error::Result;
use crate::services::{CustomerService, LandingService};
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Liveness response of this server
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query string of the customer page
#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    pub search: Option<String>,
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint - GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Pages
// ============================================================================

/// Landing page - GET /
pub async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = LandingService::load(state.api.as_ref()).await;
    Html(views::render_landing_page(&page))
}

/// Customer management page - GET /customers?search=...
///
/// Fetch failures are part of the page (an error view), not an HTTP error.
pub async fn customer_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CustomerQuery>,
) -> Html<String> {
    let page = CustomerService::load(
        state.api.as_ref(),
        state.customer_source(),
        query.search.as_deref(),
    )
    .await;

    Html(views::render_customer_page(&page))
}

// ============================================================================
// Records
// ============================================================================

/// Single customer record - GET /customers/{id}
pub async fn customer_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>> {
    info!("Customer {} requested", id);
    let customer = state.api.get_customer(id).await?;
    Ok(Json(customer))
}
